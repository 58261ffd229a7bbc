//! The full set of diagnostics the compiler can surface

use rill_ast::symbol_table::SemanticError;
use rill_ast_parsing::error::{ParseError, SyntaxError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The source (or output) file could not be used at all
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: FileError: {message}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

impl FileError {
    /// Creates a new error
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// The external toolchain failed; carries clang's own diagnostic text
#[derive(Debug, Clone, PartialEq, Error)]
#[error("CompilationError: {message}")]
pub struct CompilationError {
    pub message: String,
}

impl CompilationError {
    /// Creates a new error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any diagnostic a compilation can end with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Compilation(#[from] CompilationError),
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Syntax(error) => CompileError::Syntax(error),
            ParseError::Semantic(error) => CompileError::Semantic(error),
        }
    }
}

/// A type alias for general results in rillc
pub type CompileResult<T> = Result<T, CompileError>;
