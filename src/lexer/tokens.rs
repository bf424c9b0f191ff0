use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::source::source::SourceRange;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::KeywordFn);
        map.insert("extern", TokenKind::KeywordExtern);
        map.insert("enum", TokenKind::KeywordEnum);
        map.insert("struct", TokenKind::KeywordStruct);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Invalid,
    EOF,
    Identifier,
    Integer,
    Operator,

    KeywordFn,
    KeywordExtern,
    KeywordEnum,
    KeywordStruct,

    ParenLeft,
    ParenRight,
    BraceLeft,
    BraceRight,
    BracketLeft,
    BracketRight,
    Comma,
    Semicolon,
    Colon,
}

impl TokenKind {
    /// Stable identifier used in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Invalid => "Invalid",
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Operator => "Operator",
            TokenKind::KeywordFn => "KeywordFn",
            TokenKind::KeywordExtern => "KeywordExtern",
            TokenKind::KeywordEnum => "KeywordEnum",
            TokenKind::KeywordStruct => "KeywordStruct",
            TokenKind::ParenLeft => "ParenLeft",
            TokenKind::ParenRight => "ParenRight",
            TokenKind::BraceLeft => "BraceLeft",
            TokenKind::BraceRight => "BraceRight",
            TokenKind::BracketLeft => "BracketLeft",
            TokenKind::BracketRight => "BracketRight",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Colon => "Colon",
        }
    }

    /// Human-readable description used in error messages.
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Invalid => "invalid token",
            TokenKind::EOF => "end of file",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer literal",
            TokenKind::Operator => "operator",
            TokenKind::KeywordFn => "keyword 'fn'",
            TokenKind::KeywordExtern => "keyword 'extern'",
            TokenKind::KeywordEnum => "keyword 'enum'",
            TokenKind::KeywordStruct => "keyword 'struct'",
            TokenKind::ParenLeft => "'('",
            TokenKind::ParenRight => "')'",
            TokenKind::BraceLeft => "'{'",
            TokenKind::BraceRight => "'}'",
            TokenKind::BracketLeft => "'['",
            TokenKind::BracketRight => "']'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Colon => "':'",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceRange,
    /// The token's text. Exact for every kind except `Invalid`, whose single
    /// byte may be part of a multi-byte character and is decoded lossily.
    pub value: String,
    /// The exact source bytes of the token.
    pub raw: Vec<u8>,
    /// Decoded value, only meaningful for `TokenKind::Integer`.
    pub int_value: i64,
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_not(&self, kind: TokenKind) -> bool {
        self.kind != kind
    }

    /// True for an operator token spelled exactly `symbol`.
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == symbol
    }

    /// The exact source bytes; concatenated with the skipped whitespace
    /// they reproduce the input.
    pub fn text(&self) -> &[u8] {
        &self.raw
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {:?})", self.kind.name(), self.value)
    }
}
