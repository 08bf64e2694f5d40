//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a token sequence into
//! a `Program`. It handles:
//!
//! - Declaration parsing (package, import, struct, func)
//! - Statement parsing (assignments, definitions, control flow, blocks)
//! - Expression parsing by precedence climbing, one function per level
//! - Type name parsing for fields, parameters and return signatures
//!
//! Any mismatch aborts the parse with a positional error; there is no
//! recovery and no partial tree.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
