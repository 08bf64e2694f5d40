//! Unit tests for error handling.
//!
//! This module contains tests for error types and diagnostic rendering.

use pretty_assertions::assert_eq;

use crate::errors::errors::{format_error, Error, ErrorImpl, ErrorTip};
use crate::{parse_source, Position};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ExpectedIdentifier {
            found: "42".to_string(),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "ExpectedIdentifier");
    assert_eq!(error.get_position(), &Position::new(3, 7));
}

#[test]
fn test_error_kind() {
    let kind = ErrorImpl::UnexpectedToken {
        expected: "{".to_string(),
        found: ")".to_string(),
    };
    let error = Error::new(kind.clone(), Position::start());

    assert_eq!(error.get_kind(), &kind);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "{".to_string(),
            found: ")".to_string(),
        },
        Position::new(1, 12),
    );

    assert_eq!(
        error.to_string(),
        "unexpected token: expected \"{\", found \")\" at line 1, column 12"
    );
}

#[test]
fn test_end_of_input_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            context: "}".to_string(),
        },
        Position::new(4, 2),
    );

    assert_eq!(
        error.to_string(),
        "unexpected end of input, expected } at line 4, column 2"
    );
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::UnexpectedEndOfInput { context: "expression".to_string() }, "UnexpectedEndOfInput"),
        (
            ErrorImpl::UnexpectedToken { expected: ")".to_string(), found: "]".to_string() },
            "UnexpectedToken",
        ),
        (ErrorImpl::ExpectedIdentifier { found: "1".to_string() }, "ExpectedIdentifier"),
        (ErrorImpl::InvalidNumericLiteral { literal: "1.5i8".to_string() }, "InvalidNumericLiteral"),
        (ErrorImpl::NestingTooDeep { limit: 100 }, "NestingTooDeep"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, Position::start()).get_error_name(), name);
    }
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "{".to_string(),
            found: "struct".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
    assert_eq!(error.get_tip().to_string(), "Expected `{`, found `struct`");
}

#[test]
fn test_expected_identifier_has_no_tip() {
    let error = Error::new(
        ErrorImpl::ExpectedIdentifier {
            found: "struct".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_format_error() {
    let source = "package main\nfunc f ( ) ) {\n}";
    let error = parse_source(source).unwrap_err();

    assert_eq!(
        format_error(&error, "main.fox", source),
        "Error: ExpectedIdentifier\n\
         -> main.fox\n  \
         |\n\
         2 | func f ( ) ) {\n  \
         | -----------^"
    );
}

#[test]
fn test_format_error_strips_indentation() {
    let source = "func f() {\n    x := )\n}";
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "expression".to_string(),
            found: ")".to_string(),
        },
        Position::new(2, 10),
    );

    let rendered = format_error(&error, "f.fox", source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "2 | x := )");
    assert_eq!(lines[4], "  | -----^");
}

#[test]
fn test_format_error_past_last_line() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            context: "}".to_string(),
        },
        Position::new(9, 1),
    );

    let rendered = format_error(&error, "f.fox", "func f() {");

    assert!(rendered.contains("9 | \n"));
    assert!(rendered.ends_with("| ^"));
}
