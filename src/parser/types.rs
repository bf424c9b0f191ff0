//! Type annotation parsing.
//!
//! Only two shapes exist: a type name (`i32`) and the unit type `()`.

use crate::{
    ast::types::Type,
    errors::errors::{ParseError, ParseResult},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> ParseResult<Type> {
    match parser.current_token_kind() {
        TokenKind::Identifier => Ok(Type::Name(parser.consume_token().value)),
        TokenKind::ParenLeft => {
            parser.consume_token();
            parser.expect(TokenKind::ParenRight)?;
            Ok(Type::Unit)
        }
        found => parser.fail_here(ParseError::ExpectedType { found }),
    }
}
