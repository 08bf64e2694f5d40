use serde::Serialize;

use super::expressions::Expr;

/// Statement
///
/// Every variant owns its children outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    Return {
        values: Vec<Expr>,
    },
    If {
        cond: Expr,
        then: Vec<Stmt>,
        #[serde(rename = "else")]
        else_: Option<Vec<Stmt>>,
    },
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        post: Option<Box<Stmt>>,
        body: Vec<Stmt>,
    },
    /// `name = value`
    Assign {
        name: String,
        op: String,
        value: Expr,
    },
    /// `name := value`
    Define {
        name: String,
        value: Expr,
    },
    Break,
    Continue,
    ExprStatement {
        expr: Expr,
    },
}
