use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::InvalidNumericLiteral { .. } => "InvalidNumericLiteral",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput { context } => ErrorTip::Suggestion(format!(
                "Input ended while expecting {}, is a closing delimiter missing?",
                context
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedIdentifier { .. } => ErrorTip::None,
            ErrorImpl::InvalidNumericLiteral { .. } => ErrorTip::Suggestion(String::from(
                "Float literals cannot carry an integer suffix",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Split the expression or block, at most {} levels may nest",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected end of input, expected {context}")]
    UnexpectedEndOfInput { context: String },
    #[error("unexpected token: expected {expected:?}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected identifier, found {found:?}")]
    ExpectedIdentifier { found: String },
    #[error("invalid numeric literal: {literal:?}")]
    InvalidNumericLiteral { literal: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Renders an error as a caret diagnostic against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (Expected `{`, found `)`)
/// -> main.fox
///    |
/// 20 | func f ( ) ) {
///    | -----------^
/// ```
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = source
        .lines()
        .nth(position.line.saturating_sub(1) as usize)
        .unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (&string[start..], start)
}
