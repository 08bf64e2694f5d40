//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Fox source code
//! into a sequence of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, literals, operators and delimiters
//!   through shared lookup tables
//! - Maximal-munch matching of two-character operators
//! - Token line/column tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
