#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{ast::ast::Program, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Tokenizes and parses a complete Fox source file.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::{parse_source, Position};

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "line 3, column 14");
        assert_eq!(Position::start(), Position::new(1, 1));
    }

    #[test]
    fn test_parse_source() {
        let program = parse_source("package main\nfunc main ( ) { }").unwrap();

        assert_eq!(program.package_name, "main");
        assert_eq!(program.funcs.len(), 1);
        assert_eq!(program.funcs[0].name, "main");
    }

    #[test]
    fn test_parse_source_propagates_lexer_errors() {
        let error = parse_source("func f ( ) { x := 1.5i32 }").unwrap_err();

        assert_eq!(error.get_error_name(), "InvalidNumericLiteral");
    }
}
