//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level driver.
//! Expressions are parsed by precedence climbing, statements and
//! declarations by recursive descent dispatched through lookup tables.
//!
//! It maintains lookup tables for:
//! - Declaration handlers (top level)
//! - Statement handlers

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::lookups::{create_token_lookups, DeclHandler, DeclLookup, StmtHandler, StmtLookup};

/// Deepest nesting of groupings, prefix operators, calls and blocks.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Knobs that change how strictly the token stream is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on tokens that start no declaration instead of skipping them.
    pub strict_top_level: bool,
}

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token sequence and the single cursor into it. Every
/// parse function takes `&mut Parser`, so the cursor is threaded explicitly
/// and only ever moves forward.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token sequence
    pos: usize,
    /// Current nesting depth, bounded by `MAX_NESTING_DEPTH`
    depth: usize,
    options: ParseOptions,
    /// Lookup table for top-level declaration handlers
    decl_lookup: DeclLookup,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser with default options and registered handlers.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: ParseOptions) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            options,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `EndOfFile` past the last one.
    pub fn current_token_kind(&self) -> TokenKind {
        self.peek_kind(0)
    }

    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EndOfFile)
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes a token of the given kind.
    ///
    /// # Returns
    ///
    /// The consumed token, `UnexpectedEndOfInput` if the sequence is
    /// exhausted, or `UnexpectedToken` if the kind does not match.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token() {
            None => Err(self.end_of_input(&expected_kind.to_string())),
            Some(token) if token.kind != expected_kind => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: token.text.clone(),
                },
                token.position(),
            )),
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
        }
    }

    /// Consumes an identifier token.
    pub fn expect_ident(&mut self) -> Result<Token, Error> {
        match self.current_token() {
            None => Err(self.end_of_input("identifier")),
            Some(token) if token.kind != TokenKind::Ident => Err(Error::new(
                ErrorImpl::ExpectedIdentifier {
                    found: token.text.clone(),
                },
                token.position(),
            )),
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
        }
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected.to_string(),
                    found: token.text.clone(),
                },
                token.position(),
            ),
            None => self.end_of_input(expected),
        }
    }

    pub fn end_of_input(&self, context: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                context: context.to_string(),
            },
            self.end_position(),
        )
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current token once the depth would
    /// exceed `MAX_NESTING_DEPTH`.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the cursor index.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.position(),
            None => self.end_position(),
        }
    }

    /// Position just past the last token.
    pub fn end_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.end_position())
            .unwrap_or_else(Position::start)
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a top-level declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a token sequence into a Program with default options.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    parse_with_options(tokens, ParseOptions::default())
}

/// Parses a token sequence into a Program.
///
/// Declarations are dispatched on the keyword at the cursor until the
/// sequence is exhausted. The first error aborts the whole parse.
pub fn parse_with_options(tokens: Vec<Token>, options: ParseOptions) -> Result<Program, Error> {
    let mut parser = Parser::with_options(tokens, options);
    let mut program = Program::default();

    while parser.has_tokens() {
        let kind = parser.current_token_kind();

        if let Some(handler) = parser.get_decl_lookup().get(&kind).copied() {
            log::trace!("parsing `{}` declaration at {}", kind, parser.get_position());
            handler(&mut parser, &mut program)?;
            continue;
        }

        if parser.options().strict_top_level {
            return Err(parser.unexpected("declaration"));
        }

        if let Some(token) = parser.advance() {
            log::warn!(
                "skipping unexpected top-level token `{}` at {}",
                token.text,
                token.position()
            );
        }
    }

    log::debug!(
        "parsed package `{}`: {} imports, {} structs, {} funcs",
        program.package_name,
        program.imports.len(),
        program.structs.len(),
        program.funcs.len()
    );

    Ok(program)
}
