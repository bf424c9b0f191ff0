use std::fmt::Display;

use crate::source::source::SourceRange;

use super::{expressions::Expr, types::Type};

/// The signature shared by extern declarations and definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncProto {
    pub name: String,
    pub arg_names: Vec<String>,
    /// Parallel to `arg_names`; `None` for an unannotated parameter.
    pub arg_types: Vec<Option<Type>>,
    pub return_type: Type,
    pub location: SourceRange,
}

impl Display for FuncProto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FuncProto(name = {}, args = {{", self.name)?;
        for (i, (name, ty)) in self.arg_names.iter().zip(&self.arg_types).enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            match ty {
                Some(ty) => write!(f, "{}: {}", name, ty)?,
                None => write!(f, "{}", name)?,
            }
        }
        write!(f, "}}, returnType = {})", self.return_type)
    }
}

/// A prototype whose body is supplied at link time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternFunc {
    pub proto: FuncProto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDef {
    pub proto: FuncProto,
    /// Always a `Block` expression.
    pub body: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Func {
    Extern(ExternFunc),
    Def(FuncDef),
}

impl Func {
    pub fn proto(&self) -> &FuncProto {
        match self {
            Func::Extern(func) => &func.proto,
            Func::Def(func) => &func.proto,
        }
    }

    pub fn name(&self) -> &str {
        &self.proto().name
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Func::Extern(func) => write!(f, "ExternFunc(proto = {})", func.proto),
            Func::Def(func) => write!(f, "FuncDef(proto = {}, body = {})", func.proto, func.body),
        }
    }
}

/// Every function of one compilation unit, in source order. The order is
/// also the order in which code is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub functions: Vec<Func>,
}

impl Module {
    pub fn new(functions: Vec<Func>) -> Self {
        Module { functions }
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Module{{")?;
        for func in &self.functions {
            writeln!(f, "  {};", func)?;
        }
        writeln!(f, "}}")
    }
}
