//! Renders a validated program to C source text.
//!
//! The emitter assumes the tree already passed analysis; it performs no
//! checking of its own. Every variable becomes a C `double`, the program
//! block becomes the body of `main`, and the required `#include` lines are
//! collected while walking and prepended at the end.

use rill_ast::expr::Expr;
use rill_ast::statement::{Block, Declaration, Else, If, Input, Print, PrintValue, Stmt, While};
use rill_ast::Program;
use std::collections::BTreeSet;

/// Emits C code for a whole program
#[derive(Debug, Default)]
pub struct Emitter {
    libraries: BTreeSet<&'static str>,
    code: String,
}

impl Emitter {
    /// Renders `program` to compilable C text
    pub fn emit(program: &Program) -> String {
        let mut emitter = Emitter::default();
        emitter.block(&program.block);

        let header: String = emitter
            .libraries
            .iter()
            .map(|library| format!("#include<{library}>\n"))
            .collect();
        format!("{header}int main(){}\n", emitter.code)
    }

    fn block(&mut self, block: &Block) {
        self.code.push('{');
        for statement in &block.statements {
            self.statement(statement);
        }
        self.code.push('}');
    }

    fn statement(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Block(block) => self.block(block),
            Stmt::If(if_statement) => self.if_statement(if_statement),
            Stmt::While(while_statement) => self.while_statement(while_statement),
            Stmt::Input(input) => self.input(input),
            Stmt::Print(print) => self.print(print),
            Stmt::Declaration(declaration) => self.declaration(declaration),
            Stmt::Assignment(assignment) => {
                self.code.push_str(&assignment.identifier.name);
                self.code.push('=');
                self.expression(&assignment.expression);
                self.code.push(';');
            }
        }
    }

    fn if_statement(&mut self, if_statement: &If) {
        self.code.push_str("if(");
        self.expression(&if_statement.condition);
        self.code.push(')');
        self.block(&if_statement.block);

        if let Some(else_branch) = &if_statement.else_branch {
            self.code.push_str("else ");
            match else_branch {
                Else::If(chained) => self.if_statement(chained),
                Else::Block(block) => self.block(block),
            }
        }
    }

    fn while_statement(&mut self, while_statement: &While) {
        self.code.push_str("while(");
        self.expression(&while_statement.condition);
        self.code.push(')');
        self.block(&while_statement.block);
    }

    /// A failed read leaves the variable at zero instead of propagating
    /// scanf's error.
    fn input(&mut self, input: &Input) {
        self.libraries.insert("stdio.h");

        self.code.push_str("if (!scanf(\"%lf\", &");
        self.code.push_str(&input.identifier.name);
        self.code.push_str("))");
        self.code.push_str(&input.identifier.name);
        self.code.push_str(" = 0;");
    }

    fn print(&mut self, print: &Print) {
        self.libraries.insert("stdio.h");

        match &print.value {
            PrintValue::String(literal) => {
                self.code.push_str("puts(");
                self.code.push('"');
                self.code.push_str(&literal.value);
                self.code.push('"');
            }
            PrintValue::Expression(expression) => {
                self.code.push_str("printf(\"%lf\\n\",");
                self.expression(expression);
            }
        }
        self.code.push_str(");");
    }

    fn declaration(&mut self, declaration: &Declaration) {
        self.code.push_str("double ");
        self.code.push_str(&declaration.identifier.name);
        self.code.push('=');
        match &declaration.expression {
            Some(expression) => self.expression(expression),
            None => self.code.push_str("0.0"),
        }
        self.code.push(';');
    }

    fn expression(&mut self, expression: &Expr) {
        match expression {
            Expr::Identifier(identifier) => self.code.push_str(&identifier.name),
            Expr::Number(number) => self.code.push_str(&number.value.to_string()),
            Expr::Parenthese(inner) => {
                self.code.push('(');
                self.expression(&inner.value);
                self.code.push(')');
            }
            Expr::Unary(unary) => {
                self.code.push_str(&unary.operator.to_string());
                self.expression(&unary.value);
            }
            Expr::Binary(binary) => {
                self.expression(&binary.left);
                self.code.push_str(&binary.operator.to_string());
                self.expression(&binary.right);
            }
            Expr::Comparison(comparison) => {
                self.expression(&comparison.left);
                self.code.push_str(&comparison.operator.to_string());
                self.expression(&comparison.right);
            }
        }
    }
}
