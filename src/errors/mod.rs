//! Error types and error handling for the parser.
//!
//! This module defines the error types raised while lexing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexer and parser
//! - Caret-style diagnostic rendering

pub mod errors;

#[cfg(test)]
mod tests;
