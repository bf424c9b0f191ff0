use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::lexer::tokens::{Token, TokenKind};

/// Precedence ranks of binary operators; later variants bind tighter. All
/// operators are left associative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();
        map.insert("+", BindingPower::Additive);
        map.insert("-", BindingPower::Additive);
        map.insert("*", BindingPower::Multiplicative);
        map.insert("/", BindingPower::Multiplicative);
        map
    };
}

/// The binding power of `token` if it is a binary operator with a known
/// precedence. Any other operator spelling ends an expression.
pub fn binary_precedence(token: &Token) -> Option<BindingPower> {
    if token.is_not(TokenKind::Operator) {
        return None;
    }
    PRECEDENCE_LOOKUP.get(token.value.as_str()).copied()
}
