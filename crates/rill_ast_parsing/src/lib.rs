//! The rill front end: lexing, parsing and semantic analysis.
//!
//! Source text flows through three stages. The [Lexer](lexer::Lexer)
//! produces tokens on demand; the [Parser](parser::Parser) pulls them,
//! builds the syntax tree and fills each block's symbol table as it goes;
//! the [Analyzer](analyzer::Analyzer) then re-walks the finished tree and
//! validates every identifier reference. Each stage fails fast: the first
//! diagnostic aborts the whole pipeline.

pub mod analyzer;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, ParseResult, SyntaxError};

use crate::lexer::Lexer;
use crate::parser::Parser;
use rill_ast::Program;
use std::path::PathBuf;

/// Parses source text into a program, tagging every location with `file`
/// when one is given.
pub fn parse(source: &str, file: Option<PathBuf>) -> ParseResult<Program> {
    let parser = Parser::new(Lexer::new(source, file))?;
    parser.parse()
}
