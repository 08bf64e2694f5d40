//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's literal text
/// * `$line` - Line of the first character of the lexeme
/// * `$column` - Column of the first character of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 1, 5);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            text: $text,
            line: $line,
            column: $column,
        }
    };
}
