//! Per-block mapping from variable name to declaration location

use rill_tokens::spanned::Location;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use thiserror::Error;

/// A scope or declaration violation, reported at the offending location
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{location}: SemanticError: {message}")]
pub struct SemanticError {
    pub location: Location,
    pub message: String,
}

impl SemanticError {
    /// Creates a new error
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// Maps the names declared directly inside one block to where they were
/// declared. Owned by the block's AST node and read-only once parsing ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, Location>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration. A name can only be entered once per table.
    pub fn define(&mut self, name: &str, location: Location) -> Result<(), SemanticError> {
        match self.symbols.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(SemanticError::new(
                location,
                format!("{name} already defined in this scope"),
            )),
            Entry::Vacant(entry) => {
                entry.insert(location);
                Ok(())
            }
        }
    }

    /// Gets the declaration location of a name declared in this table
    pub fn lookup(&self, name: &str) -> Option<&Location> {
        self.symbols.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_tokens::spanned::Position;

    fn location() -> Location {
        Location::new(None, Position::new(1, 1), Position::new(1, 2))
    }

    #[test]
    fn test_define_then_lookup() {
        let mut table = SymbolTable::new();
        table.define("a", location()).unwrap();
        assert_eq!(table.lookup("a"), Some(&location()));
    }

    #[test]
    fn test_redefinition_is_rejected() {
        let mut table = SymbolTable::new();
        table.define("a", location()).unwrap();

        let error = table.define("a", location()).unwrap_err();
        assert_eq!(error.message, "a already defined in this scope");
        assert_eq!(error.to_string(), "<string>:1:1: SemanticError: a already defined in this scope");
    }

    #[test]
    fn test_undeclared_lookup() {
        let table = SymbolTable::new();
        assert_eq!(table.lookup("a"), None);
    }
}
