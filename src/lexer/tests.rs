//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals
//! - Operators and delimiters
//! - Line/column tracking
//! - Error cases

use test_case::test_case;

use crate::{errors::errors::ErrorImpl, Position};

use super::{
    lexer::tokenize,
    tokens::{Delimiter, Keyword, Operator, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "package import type struct func var const if else for break continue return";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), Keyword::ALL.len());
    for (token, keyword) in tokens.iter().zip(Keyword::ALL.iter()) {
        assert_eq!(token.kind, TokenKind::Keyword(*keyword));
        assert_eq!(token.text, keyword.as_str());
    }
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _x CamelCase fmt.Println packages").unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Ident));
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "bar_baz");
    assert_eq!(tokens[2].text, "_x");
    assert_eq!(tokens[3].text, "CamelCase");
    assert_eq!(tokens[4].text, "fmt.Println");
    assert_eq!(tokens[5].text, "packages");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 1.2.3 12ab").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].text, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[3].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[3].text, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[5].kind, TokenKind::Ident);
}

#[test]
fn test_tokenize_sign_is_an_operator() {
    let tokens = tokenize("-5").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Operator(Operator::Dash));
    assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].text, "5");
}

#[test_case("1.5i32" ; "float with signed suffix")]
#[test_case("2.0u8" ; "float with unsigned suffix")]
#[test_case("3.i" ; "bare suffix")]
fn test_tokenize_invalid_numeric_literal(literal: &str) {
    let source = format!("x := {}", literal);
    let error = tokenize(&source).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidNumericLiteral { literal: literal.to_string() }
    );
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 6);
}

#[test]
fn test_tokenize_float_with_other_suffix_is_identifier() {
    let tokens = tokenize("1.5x").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Ident);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "\"hello\"");
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].text, "\"multiple words\"");
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].text, "\"\"");
}

#[test]
fn test_tokenize_string_keeps_escapes_verbatim() {
    let tokens = tokenize(r#""say \"hi\"\n" x"#).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, r#""say \"hi\"\n""#);
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn test_tokenize_string_flushes_buffer() {
    let tokens = tokenize(r#"print"x""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text, "print");
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
}

#[test]
fn test_tokenize_unterminated_string() {
    let tokens = tokenize("x = \"open").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].text, "\"open");
}

#[test_case("+", TokenKind::Operator(Operator::Plus))]
#[test_case("-", TokenKind::Operator(Operator::Dash))]
#[test_case("*", TokenKind::Operator(Operator::Star))]
#[test_case("/", TokenKind::Operator(Operator::Slash))]
#[test_case("=", TokenKind::Operator(Operator::Assignment))]
#[test_case(":=", TokenKind::Operator(Operator::Define))]
#[test_case("==", TokenKind::Operator(Operator::Equals))]
#[test_case("!=", TokenKind::Operator(Operator::NotEquals))]
#[test_case("<", TokenKind::Operator(Operator::Less))]
#[test_case(">", TokenKind::Operator(Operator::Greater))]
#[test_case("<=", TokenKind::Operator(Operator::LessEquals))]
#[test_case(">=", TokenKind::Operator(Operator::GreaterEquals))]
#[test_case("&&", TokenKind::Operator(Operator::And))]
#[test_case("||", TokenKind::Operator(Operator::Or))]
#[test_case("!", TokenKind::Operator(Operator::Not))]
#[test_case("(", TokenKind::Delimiter(Delimiter::OpenParen))]
#[test_case(")", TokenKind::Delimiter(Delimiter::CloseParen))]
#[test_case("{", TokenKind::Delimiter(Delimiter::OpenCurly))]
#[test_case("}", TokenKind::Delimiter(Delimiter::CloseCurly))]
#[test_case("[", TokenKind::Delimiter(Delimiter::OpenBracket))]
#[test_case("]", TokenKind::Delimiter(Delimiter::CloseBracket))]
#[test_case(",", TokenKind::Delimiter(Delimiter::Comma))]
#[test_case(";", TokenKind::Delimiter(Delimiter::Semicolon))]
fn test_tokenize_symbol_in_isolation(text: &str, kind: TokenKind) {
    let tokens = tokenize(text).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].text, text);
}

#[test]
fn test_tokenize_every_table_entry_in_isolation() {
    for operator in Operator::ALL {
        let tokens = tokenize(operator.as_str()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Operator(operator));
    }

    for delimiter in Delimiter::ALL {
        let tokens = tokenize(delimiter.as_str()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Delimiter(delimiter));
    }
}

#[test]
fn test_tokenize_maximal_munch() {
    let tokens = tokenize("x:=y==z!=w").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Operator(Operator::Define),
            TokenKind::Ident,
            TokenKind::Operator(Operator::Equals),
            TokenKind::Ident,
            TokenKind::Operator(Operator::NotEquals),
            TokenKind::Ident,
        ]
    );
}

#[test]
fn test_tokenize_operators_flush_buffer() {
    let tokens = tokenize("a+b*(c-d)/e").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();

    assert_eq!(texts, vec!["a", "+", "b", "*", "(", "c", "-", "d", ")", "/", "e"]);
}

#[test]
fn test_tokenize_positions() {
    let source = "package main\n\nfunc f(p *Point) {\n\treturn \"x\"\n}";
    let tokens = tokenize(source).unwrap();

    let positions: Vec<(&str, u32, u32)> = tokens
        .iter()
        .map(|token| (token.text.as_str(), token.line, token.column))
        .collect();

    assert_eq!(
        positions,
        vec![
            ("package", 1, 1),
            ("main", 1, 9),
            ("func", 3, 1),
            ("f", 3, 6),
            ("(", 3, 7),
            ("p", 3, 8),
            ("*", 3, 10),
            ("Point", 3, 11),
            (")", 3, 16),
            ("{", 3, 18),
            ("return", 4, 2),
            ("\"x\"", 4, 9),
            ("}", 5, 1),
        ]
    );
}

#[test]
fn test_tokenize_multiline_string_advances_line() {
    let tokens = tokenize("\"a\nb\" c").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].text, "c");
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].column, 4);
}

#[test]
fn test_token_end_position() {
    let tokens = tokenize("name \"a\nbc\"").unwrap();

    assert_eq!(tokens[0].end_position(), Position::new(1, 5));
    assert_eq!(tokens[1].end_position(), Position::new(2, 4));
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \n\t ").unwrap().is_empty());
}

#[test]
fn test_tokenize_unicode_columns() {
    let tokens = tokenize("héllo wörld").unwrap();

    assert_eq!(tokens[0].text, "héllo");
    assert_eq!(tokens[1].column, 7);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("func main").unwrap();

    assert_eq!(tokens[0].to_string(), "func 'func' 1:1");
    assert_eq!(tokens[1].to_string(), "IDENT 'main' 1:6");
}
