use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> =
        Keyword::ALL.iter().map(|keyword| (keyword.as_str(), *keyword)).collect();
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> =
        Operator::ALL.iter().map(|operator| (operator.as_str(), *operator)).collect();
    pub static ref DELIMITER_LOOKUP: HashMap<&'static str, Delimiter> =
        Delimiter::ALL.iter().map(|delimiter| (delimiter.as_str(), *delimiter)).collect();
}

/// Looks up an operator or delimiter by its literal text.
pub fn lookup_symbol(text: &str) -> Option<TokenKind> {
    if let Some(operator) = OPERATOR_LOOKUP.get(text) {
        return Some(TokenKind::Operator(*operator));
    }

    DELIMITER_LOOKUP.get(text).map(|delimiter| TokenKind::Delimiter(*delimiter))
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Package,
    Import,
    Type,
    Struct,
    Func,
    Var,
    Const,
    If,
    Else,
    For,
    Break,
    Continue,
    Return,
}

impl Keyword {
    pub const ALL: [Keyword; 13] = [
        Keyword::Package,
        Keyword::Import,
        Keyword::Type,
        Keyword::Struct,
        Keyword::Func,
        Keyword::Var,
        Keyword::Const,
        Keyword::If,
        Keyword::Else,
        Keyword::For,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Return,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Package => "package",
            Keyword::Import => "import",
            Keyword::Type => "type",
            Keyword::Struct => "struct",
            Keyword::Func => "func",
            Keyword::Var => "var",
            Keyword::Const => "const",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,          // +
    Dash,          // -
    Star,          // *
    Slash,         // /
    Assignment,    // =
    Define,        // :=
    Equals,        // ==
    NotEquals,     // !=
    Less,          // <
    Greater,       // >
    LessEquals,    // <=
    GreaterEquals, // >=
    And,           // &&
    Or,            // ||
    Not,           // !
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Plus,
        Operator::Dash,
        Operator::Star,
        Operator::Slash,
        Operator::Assignment,
        Operator::Define,
        Operator::Equals,
        Operator::NotEquals,
        Operator::Less,
        Operator::Greater,
        Operator::LessEquals,
        Operator::GreaterEquals,
        Operator::And,
        Operator::Or,
        Operator::Not,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Dash => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Assignment => "=",
            Operator::Define => ":=",
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEquals => "<=",
            Operator::GreaterEquals => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Not => "!",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Delimiter {
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
}

impl Delimiter {
    pub const ALL: [Delimiter; 8] = [
        Delimiter::OpenParen,
        Delimiter::CloseParen,
        Delimiter::OpenCurly,
        Delimiter::CloseCurly,
        Delimiter::OpenBracket,
        Delimiter::CloseBracket,
        Delimiter::Comma,
        Delimiter::Semicolon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::OpenParen => "(",
            Delimiter::CloseParen => ")",
            Delimiter::OpenCurly => "{",
            Delimiter::CloseCurly => "}",
            Delimiter::OpenBracket => "[",
            Delimiter::CloseBracket => "]",
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Ident,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    Keyword(Keyword),
    Operator(Operator),
    Delimiter(Delimiter),
    EndOfFile,
    Illegal,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::IntLiteral => write!(f, "INT"),
            TokenKind::FloatLiteral => write!(f, "FLOAT"),
            TokenKind::StringLiteral => write!(f, "STRING"),
            TokenKind::Keyword(keyword) => write!(f, "{}", keyword.as_str()),
            TokenKind::Operator(operator) => write!(f, "{}", operator.as_str()),
            TokenKind::Delimiter(delimiter) => write!(f, "{}", delimiter.as_str()),
            TokenKind::EndOfFile => write!(f, "EOF"),
            TokenKind::Illegal => write!(f, "ILLEGAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' {}:{}", self.kind, self.text, self.line, self.column)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// String literal contents without the surrounding quotes.
    pub fn unquoted(&self) -> &str {
        self.text
            .strip_prefix('"')
            .and_then(|text| text.strip_suffix('"'))
            .unwrap_or(&self.text)
    }

    /// Position of the character right after the lexeme. String literals
    /// may span lines, so newlines in the text are followed.
    pub fn end_position(&self) -> Position {
        self.text.chars().fold(self.position(), |mut position, ch| {
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
            position
        })
    }
}
