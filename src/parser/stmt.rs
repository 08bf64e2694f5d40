use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::tokens::{Delimiter, Keyword, Operator, TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

const OPEN_CURLY: TokenKind = TokenKind::Delimiter(Delimiter::OpenCurly);
const CLOSE_CURLY: TokenKind = TokenKind::Delimiter(Delimiter::CloseCurly);
const SEMICOLON: TokenKind = TokenKind::Delimiter(Delimiter::Semicolon);

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();

    if kind == TokenKind::EndOfFile {
        return Err(parser.end_of_input("statement"));
    }

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser);
    }

    parse_simple_stmt(parser)
}

/// Assignment, definition or bare expression, decided by the token after the current one.
pub fn parse_simple_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek_kind(1) {
        TokenKind::Operator(Operator::Assignment) => parse_assign_stmt(parser),
        TokenKind::Operator(Operator::Define) => parse_define_stmt(parser),
        _ => parse_expr_stmt(parser),
    }
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.expect_ident()?.text;
    let op = parser.expect(TokenKind::Operator(Operator::Assignment))?.text;
    let value = parse_expr(parser)?;

    Ok(Stmt::Assign { name, op, value })
}

pub fn parse_define_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.expect_ident()?.text;
    parser.expect(TokenKind::Operator(Operator::Define))?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Define { name, value })
}

pub fn parse_expr_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expr = parse_expr(parser)?;

    Ok(Stmt::ExprStatement { expr })
}

/// Parses `{ Stmt* }`. Stray `;` between statements is skipped.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(OPEN_CURLY)?;

    let mut statements = Vec::new();

    loop {
        match parser.current_token_kind() {
            CLOSE_CURLY => break,
            SEMICOLON => {
                parser.advance();
            }
            TokenKind::EndOfFile => return Err(parser.end_of_input("}")),
            _ => statements.push(parser.nested(parse_stmt)?),
        }
    }

    parser.expect(CLOSE_CURLY)?;

    Ok(statements)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Return))?;

    let mut values = Vec::new();

    let at_terminator = parser
        .current_token()
        .map_or(true, |token| token.is_one_of_many(&[SEMICOLON, CLOSE_CURLY]));

    if !at_terminator {
        values.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
            values.push(parse_expr(parser)?);
        }
    }

    Ok(Stmt::Return { values })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Keyword(Keyword::If))?;

    let cond = parse_expr(parser)?;
    let then = parse_block(parser)?;

    let else_ = if parser.current_token_kind() == TokenKind::Keyword(Keyword::Else) {
        parser.advance();

        if parser.current_token_kind() == TokenKind::Keyword(Keyword::If) {
            Some(vec![parse_if_stmt(parser)?])
        } else {
            Some(parse_block(parser)?)
        }
    } else {
        None
    };

    Ok(Stmt::If { cond, then, else_ })
}

/// Parses `for { }`, `for cond { }` and `for init ; cond ; post { }`.
/// Any of the three clauses may be left empty.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Keyword(Keyword::For))?;

    if parser.current_token_kind() == OPEN_CURLY {
        let body = parse_block(parser)?;
        return Ok(Stmt::For { init: None, cond: None, post: None, body });
    }

    let init = if parser.current_token_kind() == SEMICOLON {
        None
    } else {
        Some(parse_simple_stmt(parser)?)
    };

    if parser.current_token_kind() == OPEN_CURLY
        && matches!(init, Some(Stmt::ExprStatement { .. }))
    {
        let cond = match init {
            Some(Stmt::ExprStatement { expr }) => Some(expr),
            _ => None,
        };
        let body = parse_block(parser)?;
        return Ok(Stmt::For { init: None, cond, post: None, body });
    }

    parser.expect(SEMICOLON)?;

    let cond = if matches!(parser.current_token_kind(), SEMICOLON | OPEN_CURLY) {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.expect(SEMICOLON)?;

    let post = if parser.current_token_kind() == OPEN_CURLY {
        None
    } else {
        Some(parse_simple_stmt(parser)?)
    };

    let body = parse_block(parser)?;

    Ok(Stmt::For {
        init: init.map(Box::new),
        cond,
        post: post.map(Box::new),
        body,
    })
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Break))?;
    Ok(Stmt::Break)
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Continue))?;
    Ok(Stmt::Continue)
}
