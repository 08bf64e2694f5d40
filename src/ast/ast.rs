use serde::Serialize;

use super::statements::Stmt;

/// Program
///
/// The root of the tree. Every sequence keeps declaration order from the source.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub package_name: String,
    pub imports: Vec<String>,
    pub structs: Vec<StructDecl>,
    pub funcs: Vec<FuncDecl>,
}

/// Struct Declaration
/// `type Point struct { x int y int }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDecl {
    pub name: String,
    pub type_name: String,
}

/// Function Declaration
/// `func name ( params ) returns { body }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub returns: Vec<ReturnSig>,
    pub body: Vec<Stmt>,
}

/// Function parameter. Pointer types keep their leading `*` in `type_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDecl {
    pub name: String,
    pub type_name: String,
}

/// Return signature. `name` is empty for unnamed results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSig {
    pub name: String,
    pub type_name: String,
}
