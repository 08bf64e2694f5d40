use serde::Serialize;

/// Expression
///
/// Literal text is kept exactly as written; no numeric conversion happens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Number {
        literal: String,
    },
    /// String contents without the surrounding quotes.
    Str {
        literal: String,
    },
    Ident {
        name: String,
    },
    /// Prefix operator. Only `*` (dereference) exists today.
    Unary {
        op: String,
        expr: Box<Expr>,
    },
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        func_name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn number(literal: &str) -> Self {
        Expr::Number { literal: literal.to_string() }
    }

    pub fn ident(name: &str) -> Self {
        Expr::Ident { name: name.to_string() }
    }

    pub fn unary(op: &str, expr: Expr) -> Self {
        Expr::Unary { op: op.to_string(), expr: Box::new(expr) }
    }

    pub fn binary(op: &str, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: op.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
