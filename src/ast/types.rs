//! Type annotations in the AST.
//!
//! Types are purely syntactic: the parser records what was written after a
//! `:` or `->` and nothing downstream validates it.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A named type such as `i32`.
    Name(String),
    /// `()`, also the return type of a prototype without `->`.
    Unit,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Name(name) => write!(f, "Type({})", name),
            Type::Unit => write!(f, "()"),
        }
    }
}
