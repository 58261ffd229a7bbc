//! Lexical building blocks shared by every stage of the rill compiler:
//! source positions and the tokens that carry them.

pub mod spanned;
pub mod token;

pub use spanned::{Location, Position, Spanned};
pub use token::{Token, TokenKind};
