use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Problems found while scanning. These are always recorded as diagnostics
/// and never stop the lexer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("invalid character {}", describe_byte(.0))]
    InvalidCharacter(u8),
    #[error("non-decimal digit in integer literal")]
    NonDecimalDigit,
}

fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", *byte as char)
    } else {
        format!("'\\x{:02x}'", byte)
    }
}

/// Reasons a parse function produced no node. The parser records each one as
/// a diagnostic at the offending token before returning it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("expected function name after 'fn' keyword")]
    ExpectedFunctionName,
    #[error("expected argument name in fn argument list")]
    ExpectedArgumentName,
    #[error("expected type, found {found}")]
    ExpectedType { found: TokenKind },
    #[error("expected keyword 'fn' or keyword 'extern', found {found}")]
    ExpectedItem { found: TokenKind },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Failures while lowering a module through a code generation backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("undefined name `{name}`")]
    UndefinedName { name: String },
    #[error("`{name}` is not callable")]
    NotCallable { name: String },
    #[error("unknown binary operator `{operator}`")]
    UnknownOperator { operator: String },
    #[error("unexpected arguments: expected {expected}, received {received}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("backend error: {message}")]
    Backend { message: String },
}

pub type CodegenResult<T> = Result<T, CodegenError>;

impl CodegenError {
    pub fn backend(message: impl Into<String>) -> Self {
        CodegenError::Backend {
            message: message.into(),
        }
    }
}
