use std::fmt::Display;

use crate::source::source::SourceRange;

/// An expression node together with the source range it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: SourceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Int(i64),
    Var(String),
    BinOp {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `callee(args...)`. The callee can be any expression.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Evaluates to its last expression.
    Block(Vec<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, location: SourceRange) -> Self {
        Expr { kind, location }
    }
}

fn write_separated(
    f: &mut std::fmt::Formatter<'_>,
    items: &[Expr],
    separator: &str,
) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::Int(value) => write!(f, "Int({})", value),
            ExprKind::Var(name) => write!(f, "Var({})", name),
            ExprKind::BinOp { op, lhs, rhs } => write!(f, "BinOp({}, {}, {})", op, lhs, rhs),
            ExprKind::Call { callee, args } => {
                write!(f, "Call(func = {}, args = {{", callee)?;
                write_separated(f, args, ", ")?;
                write!(f, "}})")
            }
            ExprKind::Block(exprs) => {
                write!(f, "Block{{")?;
                write_separated(f, exprs, "; ")?;
                write!(f, "}}")
            }
        }
    }
}
