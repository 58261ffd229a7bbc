//! Source positions attached to every token and syntax tree node

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::sync::Arc;

/// A point in a source file, 1-based on both axes
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Creates a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open span over source text, along with the file it came from.
///
/// The end position points one column past the last character of the span,
/// so a zero-width location has `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    file: Option<Arc<Path>>,
    start: Position,
    end: Position,
}

impl Location {
    /// Creates a new location
    pub fn new(file: Option<Arc<Path>>, start: Position, end: Position) -> Self {
        Self { file, start, end }
    }

    /// Gets the file this location is from, if it came from one
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub const fn start(&self) -> Position {
        self.start
    }

    pub const fn end(&self) -> Position {
        self.end
    }

    /// Creates a location spanning from the start of this one to the end of `other`
    pub fn join(&self, other: &Location) -> Location {
        Location {
            file: self.file.clone(),
            start: self.start,
            end: other.end,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}", file.display())?,
            None => write!(f, "<string>")?,
        }
        write!(f, ":{}:{}", self.start.line, self.start.column)
    }
}

/// A trait for anything that knows where in the source it came from
pub trait Spanned {
    fn location(&self) -> Location;
}

impl Spanned for Location {
    fn location(&self) -> Location {
        self.clone()
    }
}
