/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and top-level declarations
/// - expressions: The expression sum type
/// - statements: The statement sum type
pub mod ast;
pub mod expressions;
pub mod statements;
