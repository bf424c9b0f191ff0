use crate::{
    ast::{
        ast::{ExternFunc, Func, FuncDef, FuncProto},
        types::Type,
    },
    errors::errors::{ParseError, ParseResult},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_block_expr, parser::Parser, types::parse_type};

/// Parses one top-level item: a function definition or an extern declaration.
pub fn parse_item(parser: &mut Parser) -> ParseResult<Func> {
    match parser.current_token_kind() {
        TokenKind::KeywordFn => Ok(Func::Def(parse_func_def(parser)?)),
        TokenKind::KeywordExtern => Ok(Func::Extern(parse_extern_decl(parser)?)),
        found => parser.fail_here(ParseError::ExpectedItem { found }),
    }
}

/// `fn name(a, b: T) -> R`
pub fn parse_func_proto(parser: &mut Parser) -> ParseResult<FuncProto> {
    let start = parser.expect(TokenKind::KeywordFn)?.location;

    if parser.current_token_kind() != TokenKind::Identifier {
        return parser.fail_here(ParseError::ExpectedFunctionName);
    }
    let name = parser.consume_token().value;

    parser.expect(TokenKind::ParenLeft)?;

    let mut arg_names = vec![];
    let mut arg_types = vec![];
    while parser.current_token_kind() != TokenKind::ParenRight {
        if parser.current_token_kind() != TokenKind::Identifier {
            return parser.fail_here(ParseError::ExpectedArgumentName);
        }
        arg_names.push(parser.consume_token().value);

        let arg_type = if parser.current_token_kind() == TokenKind::Colon {
            parser.consume_token();
            Some(parse_type(parser)?)
        } else {
            None
        };
        arg_types.push(arg_type);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.consume_token();
        } else {
            break;
        }
    }

    let close = parser.expect(TokenKind::ParenRight)?;
    let mut location = start.to(&close.location);

    let return_type = if parser.current_token().is_operator("->") {
        parser.consume_token();
        let return_type = parse_type(parser)?;
        location = location.to(parser.previous_location());
        return_type
    } else {
        Type::Unit
    };

    Ok(FuncProto {
        name,
        arg_names,
        arg_types,
        return_type,
        location,
    })
}

/// `extern fn name(...)`, optionally terminated by `;`.
pub fn parse_extern_decl(parser: &mut Parser) -> ParseResult<ExternFunc> {
    parser.expect(TokenKind::KeywordExtern)?;
    let proto = parse_func_proto(parser)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.consume_token();
    }

    Ok(ExternFunc { proto })
}

pub fn parse_func_def(parser: &mut Parser) -> ParseResult<FuncDef> {
    let proto = parse_func_proto(parser)?;
    let body = parse_block_expr(parser)?;

    Ok(FuncDef { proto, body })
}
