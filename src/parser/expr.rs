use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Delimiter, Operator, TokenKind},
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
};

type OperandParser = fn(&mut Parser) -> Result<Expr, Error>;

/// Parses a full expression, starting at the lowest precedence level.
/// Groupings and call arguments re-enter here, so each counts as one nesting level.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_logical_or_expr)
}

pub fn parse_logical_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::LogicalOr, parse_logical_and_expr)
}

pub fn parse_logical_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::LogicalAnd, parse_comparison_expr)
}

pub fn parse_comparison_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Comparison, parse_additive_expr)
}

pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Additive, parse_multiplicative_expr)
}

pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_unary_expr)
}

/// Parses one operand with `operand`, then folds every following operator
/// of exactly `bp` into a left-associative chain.
fn parse_binary_expr(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandParser,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while binding_power(parser.current_token_kind()) == bp {
        let operator = match parser.advance() {
            Some(token) => token.text.clone(),
            None => break,
        };
        let right = operand(parser)?;

        left = Expr::Binary {
            op: operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// Prefix `*` is a dereference; it nests to the right (`**x`).
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::Operator(Operator::Star) {
        return parse_primary_expr(parser);
    }

    let operator = parser.expect(TokenKind::Operator(Operator::Star))?;
    let operand = parser.nested(parse_unary_expr)?;

    Ok(Expr::Unary {
        op: operator.text,
        expr: Box::new(operand),
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => return Err(parser.end_of_input("expression")),
    };

    match token.kind {
        TokenKind::Ident => {
            parser.advance();

            if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::OpenParen) {
                return parse_call_expr(parser, token.text);
            }

            Ok(Expr::Ident { name: token.text })
        }
        TokenKind::IntLiteral | TokenKind::FloatLiteral => {
            parser.advance();
            Ok(Expr::Number { literal: token.text })
        }
        TokenKind::StringLiteral => {
            parser.advance();
            Ok(Expr::Str { literal: token.unquoted().to_string() })
        }
        TokenKind::Delimiter(Delimiter::OpenParen) => parse_grouping_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("expression"),
                found: token.text.clone(),
            },
            token.position(),
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Delimiter(Delimiter::OpenParen))?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen))?;

    Ok(expr)
}

/// Parses `( args )` after a callee name. Bare commas are skipped.
pub fn parse_call_expr(parser: &mut Parser, func_name: String) -> Result<Expr, Error> {
    parser.expect(TokenKind::Delimiter(Delimiter::OpenParen))?;

    let mut args = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::Delimiter(Delimiter::CloseParen) => break,
            TokenKind::Delimiter(Delimiter::Comma) => {
                parser.advance();
            }
            TokenKind::EndOfFile => return Err(parser.end_of_input(")")),
            _ => args.push(parse_expr(parser)?),
        }
    }

    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen))?;

    Ok(Expr::Call { func_name, args })
}
