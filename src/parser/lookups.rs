use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{ast::Program, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::{Keyword, Operator, TokenKind},
};

use super::{decl::*, parser::Parser, stmt::*};

/// Precedence levels, lowest binding first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Comparison,
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<Operator, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(Operator::Or, BindingPower::LogicalOr);
        map.insert(Operator::And, BindingPower::LogicalAnd);

        // Comparison
        map.insert(Operator::Equals, BindingPower::Comparison);
        map.insert(Operator::NotEquals, BindingPower::Comparison);
        map.insert(Operator::Less, BindingPower::Comparison);
        map.insert(Operator::LessEquals, BindingPower::Comparison);
        map.insert(Operator::Greater, BindingPower::Comparison);
        map.insert(Operator::GreaterEquals, BindingPower::Comparison);

        // Additive and multiplicative
        map.insert(Operator::Plus, BindingPower::Additive);
        map.insert(Operator::Dash, BindingPower::Additive);
        map.insert(Operator::Star, BindingPower::Multiplicative);
        map.insert(Operator::Slash, BindingPower::Multiplicative);
        map
    };
}

/// Infix binding power of a token; `Default` for anything that is not a binary operator.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Operator(operator) => {
            BP_LOOKUP.get(&operator).copied().unwrap_or(BindingPower::Default)
        }
        _ => BindingPower::Default,
    }
}

pub type DeclHandler = fn(&mut Parser, &mut Program) -> Result<(), Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::Keyword(Keyword::Package), |parser, program| {
        program.package_name = parse_package_decl(parser)?;
        Ok(())
    });
    parser.decl(TokenKind::Keyword(Keyword::Import), |parser, program| {
        program.imports.extend(parse_import_decl(parser)?);
        Ok(())
    });
    parser.decl(TokenKind::Keyword(Keyword::Type), |parser, program| {
        program.structs.push(parse_struct_decl(parser)?);
        Ok(())
    });
    parser.decl(TokenKind::Keyword(Keyword::Func), |parser, program| {
        program.funcs.push(parse_func_decl(parser)?);
        Ok(())
    });

    // Statements
    parser.stmt(TokenKind::Keyword(Keyword::Return), parse_return_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::If), parse_if_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::For), parse_for_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Break), parse_break_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Continue), parse_continue_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
