use crate::{
    ast::expressions::{Expr, ExprKind},
    errors::errors::{ParseError, ParseResult},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_precedence, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let lhs = parse_postfix_expr(parser)?;
    parse_expr_operator(parser, lhs, BindingPower::Additive)
}

/// Precedence climbing over the binary operators that follow `lhs`.
///
/// Folds left to right while operators bind at least as tightly as
/// `min_bp`. Before each fold, `rhs` absorbs any operators that bind
/// strictly tighter than the one just consumed; the strict comparison is
/// what makes equal-precedence chains left associative.
pub fn parse_expr_operator(
    parser: &mut Parser,
    mut lhs: Expr,
    min_bp: BindingPower,
) -> ParseResult<Expr> {
    while let Some(bp) = binary_precedence(parser.current_token()) {
        if bp < min_bp {
            break;
        }

        let operator = parser.consume_token();
        let mut rhs = parse_postfix_expr(parser)?;

        // Compare against the lookahead after `rhs`, not `operator`.
        while let Some(next_bp) = binary_precedence(parser.current_token()) {
            if next_bp <= bp {
                break;
            }
            rhs = parse_expr_operator(parser, rhs, next_bp)?;
        }

        let location = lhs.location.to(&rhs.location);
        lhs = Expr::new(
            ExprKind::BinOp {
                op: operator.value,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            location,
        );
    }

    Ok(lhs)
}

/// A primary expression followed by any number of call argument lists.
pub fn parse_postfix_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_primary_expr(parser)?;

    while parser.current_token_kind() == TokenKind::ParenLeft {
        expr = parse_call_expr(parser, expr)?;
    }

    Ok(expr)
}

pub fn parse_primary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    loop {
        match parser.current_token_kind() {
            // Already reported by the lexer; skip it and try again.
            TokenKind::Invalid => {
                parser.consume_token();
            }
            TokenKind::EOF => return parser.fail_here(ParseError::UnexpectedEof),
            TokenKind::Integer => {
                let token = parser.consume_token();
                return Ok(Expr::new(ExprKind::Int(token.int_value), token.location));
            }
            TokenKind::Identifier => {
                let token = parser.consume_token();
                return Ok(Expr::new(ExprKind::Var(token.value), token.location));
            }
            TokenKind::ParenLeft => return parse_grouping_expr(parser),
            TokenKind::BraceLeft => return parse_block_expr(parser),
            found => return parser.fail_here(ParseError::ExpectedExpression { found }),
        }
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.expect(TokenKind::ParenLeft)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::ParenRight)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> ParseResult<Expr> {
    parser.expect(TokenKind::ParenLeft)?;

    let mut args = vec![];
    while parser.current_token_kind() != TokenKind::ParenRight {
        args.push(parse_expr(parser)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.consume_token();
        } else {
            break;
        }
    }

    let close = parser.expect(TokenKind::ParenRight)?;
    let location = callee.location.to(&close.location);

    Ok(Expr::new(
        ExprKind::Call {
            callee: Box::new(callee),
            args,
        },
        location,
    ))
}

/// `{ expr; expr ... }`. Semicolons between expressions are optional.
pub fn parse_block_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let open = parser.expect(TokenKind::BraceLeft)?;

    let mut exprs = vec![];
    while parser.current_token_kind() != TokenKind::BraceRight {
        exprs.push(parse_expr(parser)?);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.consume_token();
        }
    }

    let close = parser.expect(TokenKind::BraceRight)?;

    Ok(Expr::new(
        ExprKind::Block(exprs),
        open.location.to(&close.location),
    ))
}
