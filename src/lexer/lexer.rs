use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{lookup_symbol, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref INT_PATTERN: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref FLOAT_PATTERN: Regex = Regex::new(r"^[+-]?[0-9]+\.[0-9]+$").unwrap();
    // Integer-only suffixes (`i32`, `u8`, ...) are reserved and rejected on floats
    static ref SUFFIXED_FLOAT_PATTERN: Regex =
        Regex::new(r"^[+-]?[0-9]+\.[0-9]*[iu][A-Za-z0-9_]*$").unwrap();
}

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    buffer: String,
    buffer_start: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            buffer: String::new(),
            buffer_start: Position::start(),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            match self.source.get(self.pos) {
                Some('\n') => {
                    self.line += 1;
                    self.column = 1;
                }
                Some(_) => self.column += 1,
                None => return,
            }
            self.pos += 1;
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    pub fn remainder(&self, n: usize) -> String {
        self.source[self.pos..(self.pos + n).min(self.source.len())].iter().collect()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Emits the buffered identifier/keyword/number, if any.
    fn flush(&mut self) -> Result<(), Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let text = std::mem::take(&mut self.buffer);
        let start = self.buffer_start;
        let kind = classify_word(&text).map_err(|error| Error::new(error, start))?;

        self.push(MK_TOKEN!(kind, text, start.line, start.column));
        Ok(())
    }

    fn accumulate(&mut self, ch: char) {
        if self.buffer.is_empty() {
            self.buffer_start = self.position();
        }

        self.buffer.push(ch);
        self.advance_n(1);
    }
}

fn classify_word(text: &str) -> Result<TokenKind, ErrorImpl> {
    if let Some(keyword) = RESERVED_LOOKUP.get(text) {
        return Ok(TokenKind::Keyword(*keyword));
    }

    if INT_PATTERN.is_match(text) {
        return Ok(TokenKind::IntLiteral);
    }

    if FLOAT_PATTERN.is_match(text) {
        return Ok(TokenKind::FloatLiteral);
    }

    if SUFFIXED_FLOAT_PATTERN.is_match(text) {
        return Err(ErrorImpl::InvalidNumericLiteral { literal: text.to_string() });
    }

    Ok(TokenKind::Ident)
}

/// Two-character operators win over their one-character prefixes.
fn match_symbol(lexer: &Lexer) -> Option<(TokenKind, usize)> {
    if lexer.peek(1).is_some() {
        if let Some(kind) = lookup_symbol(&lexer.remainder(2)) {
            return Some((kind, 2));
        }
    }

    lookup_symbol(&lexer.remainder(1)).map(|kind| (kind, 1))
}

fn symbol_handler(lexer: &mut Lexer, kind: TokenKind, len: usize) {
    let start = lexer.position();
    let text = lexer.remainder(len);

    lexer.push(MK_TOKEN!(kind, text, start.line, start.column));
    lexer.advance_n(len);
}

fn string_handler(lexer: &mut Lexer) {
    let start = lexer.position();
    let mut literal = String::from('"');
    let mut terminated = false;

    lexer.advance_n(1);

    while !lexer.at_eof() {
        let ch = lexer.at();
        literal.push(ch);
        lexer.advance_n(1);

        if ch == '\\' {
            // Kept verbatim, but an escaped quote does not close the literal
            if !lexer.at_eof() {
                literal.push(lexer.at());
                lexer.advance_n(1);
            }
        } else if ch == '"' {
            terminated = true;
            break;
        }
    }

    let kind = if terminated {
        TokenKind::StringLiteral
    } else {
        log::debug!("unterminated string literal at {}", start);
        TokenKind::Illegal
    };

    lexer.push(MK_TOKEN!(kind, literal, start.line, start.column));
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let ch = lex.at();

        if ch.is_whitespace() {
            lex.flush()?;
            lex.advance_n(1);
            continue;
        }

        if let Some((kind, len)) = match_symbol(&lex) {
            lex.flush()?;
            symbol_handler(&mut lex, kind, len);
            continue;
        }

        if ch == '"' {
            lex.flush()?;
            string_handler(&mut lex);
            continue;
        }

        lex.accumulate(ch);
    }

    lex.flush()?;

    log::debug!("tokenized {} tokens", lex.tokens.len());
    Ok(lex.tokens)
}
