//! Top-level declaration parsing.
//!
//! - `package IDENT`
//! - `import ( path* )` or `import path`
//! - `type IDENT struct { (IDENT Type)* }`
//! - `func IDENT ( params ) returns { Stmt* }`

use crate::{
    ast::ast::{FieldDecl, FuncDecl, ParamDecl, ReturnSig, StructDecl},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Delimiter, Keyword, TokenKind},
};

use super::{
    parser::Parser,
    stmt::parse_block,
    types::{at_type_start, parse_type_name},
};

const OPEN_PAREN: TokenKind = TokenKind::Delimiter(Delimiter::OpenParen);
const CLOSE_PAREN: TokenKind = TokenKind::Delimiter(Delimiter::CloseParen);
const OPEN_CURLY: TokenKind = TokenKind::Delimiter(Delimiter::OpenCurly);
const CLOSE_CURLY: TokenKind = TokenKind::Delimiter(Delimiter::CloseCurly);
const COMMA: TokenKind = TokenKind::Delimiter(Delimiter::Comma);

pub fn parse_package_decl(parser: &mut Parser) -> Result<String, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Package))?;

    Ok(parser.expect_ident()?.text)
}

pub fn parse_import_decl(parser: &mut Parser) -> Result<Vec<String>, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Import))?;

    if parser.current_token_kind() != OPEN_PAREN {
        return Ok(vec![parse_import_path(parser)?]);
    }

    parser.expect(OPEN_PAREN)?;

    let mut imports = Vec::new();

    loop {
        match parser.current_token_kind() {
            CLOSE_PAREN => break,
            COMMA | TokenKind::Delimiter(Delimiter::Semicolon) => {
                parser.advance();
            }
            TokenKind::EndOfFile => return Err(parser.end_of_input(")")),
            _ => imports.push(parse_import_path(parser)?),
        }
    }

    parser.expect(CLOSE_PAREN)?;

    Ok(imports)
}

/// An import path is a bare identifier or a quoted string.
fn parse_import_path(parser: &mut Parser) -> Result<String, Error> {
    match parser.current_token() {
        Some(token) if token.kind == TokenKind::StringLiteral => {
            let path = token.unquoted().to_string();
            parser.advance();
            Ok(path)
        }
        Some(token) if token.kind != TokenKind::Ident => Err(Error::new(
            ErrorImpl::ExpectedIdentifier {
                found: token.text.clone(),
            },
            token.position(),
        )),
        _ => Ok(parser.expect_ident()?.text),
    }
}

pub fn parse_struct_decl(parser: &mut Parser) -> Result<StructDecl, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Type))?;
    let name = parser.expect_ident()?.text;
    parser.expect(TokenKind::Keyword(Keyword::Struct))?;
    parser.expect(OPEN_CURLY)?;

    let mut fields = Vec::new();

    loop {
        match parser.current_token_kind() {
            CLOSE_CURLY => break,
            TokenKind::EndOfFile => return Err(parser.end_of_input("}")),
            _ => {
                let name = parser.expect_ident()?.text;
                let type_name = parse_type_name(parser)?;
                fields.push(FieldDecl { name, type_name });
            }
        }
    }

    parser.expect(CLOSE_CURLY)?;

    Ok(StructDecl { name, fields })
}

pub fn parse_func_decl(parser: &mut Parser) -> Result<FuncDecl, Error> {
    parser.expect(TokenKind::Keyword(Keyword::Func))?;
    let name = parser.expect_ident()?.text;

    parser.expect(OPEN_PAREN)?;
    let params = parse_params(parser)?;
    parser.expect(CLOSE_PAREN)?;

    let returns = parse_return_sigs(parser)?;
    let body = parse_block(parser)?;

    log::trace!("parsed func `{}` with {} statements", name, body.len());

    Ok(FuncDecl {
        name,
        params,
        returns,
        body,
    })
}

/// Comma-separated `IDENT Type` pairs up to `)`. A trailing comma is tolerated.
fn parse_params(parser: &mut Parser) -> Result<Vec<ParamDecl>, Error> {
    let mut params = Vec::new();

    loop {
        match parser.current_token_kind() {
            CLOSE_PAREN => break,
            TokenKind::EndOfFile => return Err(parser.end_of_input(")")),
            _ => {}
        }

        if !params.is_empty() {
            parser.expect(COMMA)?;

            if parser.current_token_kind() == CLOSE_PAREN {
                break;
            }
        }

        let name = parser.expect_ident()?.text;
        let type_name = parse_type_name(parser)?;
        params.push(ParamDecl { name, type_name });
    }

    Ok(params)
}

/// Return signatures between `)` and `{`, optionally wrapped in parentheses.
pub fn parse_return_sigs(parser: &mut Parser) -> Result<Vec<ReturnSig>, Error> {
    if parser.current_token_kind() != OPEN_PAREN {
        return parse_return_list(parser, OPEN_CURLY);
    }

    parser.expect(OPEN_PAREN)?;
    let returns = parse_return_list(parser, CLOSE_PAREN)?;
    parser.expect(CLOSE_PAREN)?;

    Ok(returns)
}

fn parse_return_list(parser: &mut Parser, terminator: TokenKind) -> Result<Vec<ReturnSig>, Error> {
    let mut returns = Vec::new();

    loop {
        let kind = parser.current_token_kind();

        if kind == terminator {
            break;
        }

        if kind == TokenKind::EndOfFile {
            return Err(parser.end_of_input(&terminator.to_string()));
        }

        returns.push(parse_return_sig(parser)?);

        // Commas between results are optional
        if parser.current_token_kind() == COMMA {
            parser.advance();
        }
    }

    Ok(returns)
}

/// `Type` is an unnamed result, `IDENT Type` a named one. A run of bare
/// identifiers is paired greedily: `x y z` reads as `x y` then `z`.
fn parse_return_sig(parser: &mut Parser) -> Result<ReturnSig, Error> {
    let first = parse_type_name(parser)?;

    let is_plain_ident = !first.starts_with(|c: char| c == '*' || c == '[');
    if is_plain_ident && at_type_start(parser) {
        let type_name = parse_type_name(parser)?;
        return Ok(ReturnSig { name: first, type_name });
    }

    Ok(ReturnSig {
        name: String::new(),
        type_name: first,
    })
}
