//! Errors raised while turning source text into a validated syntax tree

use rill_ast::symbol_table::SemanticError;
use rill_tokens::spanned::Location;
use thiserror::Error;

/// A lexical or grammatical violation, reported at the offending location
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{location}: SyntaxError: {message}")]
pub struct SyntaxError {
    pub location: Location,
    pub message: String,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// Any error the parsing stage can surface.
///
/// Grammar violations are syntax errors; a redeclaration inside one scope is
/// caught while parsing the `let` and surfaces as a semantic error without
/// waiting for the analysis pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

pub type ParseResult<T> = Result<T, ParseError>;
