//! Validates identifier references against the scopes the parser built.
//!
//! The analyzer re-walks the finished tree in the same order the parser
//! opened its blocks, pushing each block's already-built symbol table on
//! entry and popping it on exit. Tables are never mutated here.

use log::trace;
use rill_ast::expr::{Expr, Identifier};
use rill_ast::statement::{Block, Else, If, PrintValue, Program, Stmt};
use rill_ast::symbol_table::{SemanticError, SymbolTable};

/// Walks a parsed program and rejects references to unknown (or not yet
/// visible) identifiers.
#[derive(Debug, Default)]
pub struct Analyzer<'a> {
    symbol_tables: Vec<&'a SymbolTable>,
}

impl<'a> Analyzer<'a> {
    /// Checks a whole program in one depth-first pass, stopping at the first
    /// invalid reference.
    pub fn analyze(program: &Program) -> Result<(), SemanticError> {
        Analyzer::default().block(&program.block)
    }

    fn block(&mut self, block: &'a Block) -> Result<(), SemanticError> {
        trace!("entering block at {}", block.location);
        self.symbol_tables.push(&block.symbol_table);
        for statement in &block.statements {
            self.statement(statement)?;
        }
        self.symbol_tables.pop();
        Ok(())
    }

    fn statement(&mut self, statement: &'a Stmt) -> Result<(), SemanticError> {
        match statement {
            Stmt::Block(block) => self.block(block),
            Stmt::If(if_statement) => self.if_statement(if_statement),
            Stmt::While(while_statement) => {
                self.expression(&while_statement.condition)?;
                self.block(&while_statement.block)
            }
            Stmt::Input(input) => self.reference(&input.identifier),
            Stmt::Print(print) => match &print.value {
                PrintValue::Expression(expression) => self.expression(expression),
                PrintValue::String(_) => Ok(()),
            },
            // the declared name is not a reference, only its initializer is
            // checked
            Stmt::Declaration(declaration) => match &declaration.expression {
                Some(expression) => self.expression(expression),
                None => Ok(()),
            },
            Stmt::Assignment(assignment) => {
                self.reference(&assignment.identifier)?;
                self.expression(&assignment.expression)
            }
        }
    }

    fn if_statement(&mut self, if_statement: &'a If) -> Result<(), SemanticError> {
        self.expression(&if_statement.condition)?;
        self.block(&if_statement.block)?;
        match &if_statement.else_branch {
            Some(Else::If(chained)) => self.if_statement(chained),
            Some(Else::Block(block)) => self.block(block),
            None => Ok(()),
        }
    }

    fn expression(&self, expression: &Expr) -> Result<(), SemanticError> {
        match expression {
            Expr::Identifier(identifier) => self.reference(identifier),
            Expr::Number(_) => Ok(()),
            Expr::Parenthese(inner) => self.expression(&inner.value),
            Expr::Unary(unary) => self.expression(&unary.value),
            Expr::Binary(binary) => {
                self.expression(&binary.left)?;
                self.expression(&binary.right)
            }
            Expr::Comparison(comparison) => {
                self.expression(&comparison.left)?;
                self.expression(&comparison.right)
            }
        }
    }

    fn reference(&self, identifier: &Identifier) -> Result<(), SemanticError> {
        if self.is_defined(identifier) {
            Ok(())
        } else {
            Err(SemanticError::new(
                identifier.location.clone(),
                format!("Identifier '{}' is not defined", identifier.name),
            ))
        }
    }

    /// Scans the scope chain innermost first. A table satisfies the
    /// reference only when it holds the name and the declaration's line is
    /// strictly earlier than the reference's; otherwise the scan keeps
    /// moving outward.
    fn is_defined(&self, identifier: &Identifier) -> bool {
        for table in self.symbol_tables.iter().rev() {
            let Some(declaration) = table.lookup(&identifier.name) else {
                continue;
            };
            if identifier.location.start().line > declaration.start().line {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use rill_tokens::spanned::Position;
    use test_log::test;

    fn analyze(source: &str) -> Result<(), SemanticError> {
        let program = parse(source, None).expect("parsing should succeed");
        Analyzer::analyze(&program)
    }

    #[test]
    fn test_declared_then_used() {
        // the first statement may share the opening brace's line
        analyze("{ let a = 1\nprint a\n}").unwrap();
        analyze("{\nlet a = 1\nprint a\n}").unwrap();
    }

    #[test]
    fn test_undeclared_identifier() {
        let error = analyze("{\nprint a\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");
        assert_eq!(error.location.start(), Position::new(2, 7));
    }

    #[test]
    fn test_use_on_strictly_later_line_resolves() {
        analyze("{\nlet a = 1\na = a + 1\n}").unwrap();
    }

    #[test]
    fn test_initializer_cannot_reference_itself() {
        // the visibility rule is line-granular: a use on the declaration's
        // own line never resolves to it, even textually after it
        let error = analyze("{\nlet a = a\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");
    }

    #[test]
    fn test_initializer_can_reference_earlier_declaration() {
        analyze("{\nlet a = 1\nlet b = a + 1\n}").unwrap();
    }

    #[test]
    fn test_outer_declaration_is_visible_in_nested_block() {
        analyze("{\nlet a = 1\n{\nprint a\n}\n}").unwrap();
    }

    #[test]
    fn test_shadowing_in_nested_block() {
        analyze("{\nlet a = 1\n{\nlet a = 2\nprint a\n}\n}").unwrap();
    }

    #[test]
    fn test_shadowing_falls_back_to_outer_declaration() {
        // the inner `a` is declared on the same line as its use, so the scan
        // moves outward and resolves against the outer declaration
        analyze("{\nlet a = 1\n{\nlet a = a\n}\n}").unwrap();
    }

    #[test]
    fn test_outer_name_still_visible_after_nested_block_closes() {
        analyze("{\nlet a = 1\n{\nlet b = 2\n}\nprint a\n}").unwrap();
    }

    #[test]
    fn test_nested_declaration_not_visible_outside() {
        let error = analyze("{\n{\nlet a = 1\n}\nprint a\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");
        assert_eq!(error.location.start(), Position::new(5, 7));
    }

    #[test]
    fn test_input_target_must_be_declared() {
        let error = analyze("{\ninput a\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");
        analyze("{\nlet a\ninput a\n}").unwrap();
    }

    #[test]
    fn test_assignment_target_must_be_declared() {
        let error = analyze("{\na = 1\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");
    }

    #[test]
    fn test_condition_references_are_checked() {
        let error = analyze("{\nif a == 1 {\n}\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");

        let error = analyze("{\nwhile a < 1 {\n}\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'a' is not defined");
    }

    #[test]
    fn test_else_branches_are_checked() {
        let error = analyze("{\nlet a = 1\nif a == 1 {\n} else {\nprint b\n}\n}").unwrap_err();
        assert_eq!(error.message, "Identifier 'b' is not defined");
        assert_eq!(error.location.start(), Position::new(5, 7));
    }

    #[test]
    fn test_print_string_needs_no_names() {
        analyze("{\nprint \"hello\"\n}").unwrap();
    }
}
