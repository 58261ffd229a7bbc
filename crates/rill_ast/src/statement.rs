//! Statement nodes and the program root

use crate::expr::{Expr, Identifier, StringLiteral};
use crate::symbol_table::SymbolTable;
use rill_tokens::spanned::{Location, Spanned};

/// A statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    If(If),
    While(While),
    Input(Input),
    Print(Print),
    Declaration(Declaration),
    Assignment(Assignment),
}

impl Spanned for Stmt {
    fn location(&self) -> Location {
        match self {
            Stmt::Block(node) => node.location.clone(),
            Stmt::If(node) => node.location.clone(),
            Stmt::While(node) => node.location.clone(),
            Stmt::Input(node) => node.location.clone(),
            Stmt::Print(node) => node.location.clone(),
            Stmt::Declaration(node) => node.location.clone(),
            Stmt::Assignment(node) => node.location.clone(),
        }
    }
}

/// A brace-delimited statement sequence introducing a new lexical scope.
///
/// The symbol table holds only the names declared directly in this block,
/// not those of nested blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub symbol_table: SymbolTable,
    pub location: Location,
}

/// A conditional, with an optional `else` arm that may chain another `if`
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expr,
    pub block: Block,
    pub else_branch: Option<Else>,
    pub location: Location,
}

/// The `else` arm of an [If]
#[derive(Debug, Clone, PartialEq)]
pub enum Else {
    If(Box<If>),
    Block(Block),
}

impl Spanned for Else {
    fn location(&self) -> Location {
        match self {
            Else::If(node) => node.location.clone(),
            Else::Block(node) => node.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Expr,
    pub block: Block,
    pub location: Location,
}

/// Reads a number from the console into a variable
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub identifier: Identifier,
    pub location: Location,
}

/// Writes an expression result or a string literal to the console
#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub value: PrintValue,
    pub location: Location,
}

/// What a [Print] statement prints
#[derive(Debug, Clone, PartialEq)]
pub enum PrintValue {
    Expression(Expr),
    String(StringLiteral),
}

impl Spanned for PrintValue {
    fn location(&self) -> Location {
        match self {
            PrintValue::Expression(expr) => expr.location(),
            PrintValue::String(literal) => literal.location.clone(),
        }
    }
}

/// A `let` statement introducing a new name into the enclosing block
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub identifier: Identifier,
    pub expression: Option<Expr>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub expression: Expr,
    pub location: Location,
}

/// The root of a parsed source file
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub block: Block,
}

impl Spanned for Program {
    fn location(&self) -> Location {
        self.block.location.clone()
    }
}
