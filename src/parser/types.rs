//! Type name parsing.
//!
//! Fox types are plain identifiers with optional prefixes:
//!
//! - Pointer types (`*Point`, `**int`)
//! - Slice types (`[]string`)
//!
//! A `*` here is a type prefix, never a multiplication. The prefixes are
//! folded into the returned name so the AST stores a single string.

use crate::{
    errors::errors::Error,
    lexer::tokens::{Delimiter, Operator, TokenKind},
};

use super::parser::Parser;

/// Whether the current token can start a type name.
pub fn at_type_start(parser: &Parser) -> bool {
    matches!(
        parser.current_token_kind(),
        TokenKind::Ident
            | TokenKind::Operator(Operator::Star)
            | TokenKind::Delimiter(Delimiter::OpenBracket)
    )
}

pub fn parse_type_name(parser: &mut Parser) -> Result<String, Error> {
    let mut name = String::new();

    loop {
        match parser.current_token_kind() {
            TokenKind::Operator(Operator::Star) => {
                parser.advance();
                name.push('*');
            }
            TokenKind::Delimiter(Delimiter::OpenBracket) => {
                parser.advance();
                parser.expect(TokenKind::Delimiter(Delimiter::CloseBracket))?;
                name.push_str("[]");
            }
            _ => break,
        }
    }

    name.push_str(&parser.expect_ident()?.text);

    Ok(name)
}
