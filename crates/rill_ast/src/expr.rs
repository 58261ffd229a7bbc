//! Expression nodes and the operators that combine them

use rill_tokens::spanned::{Location, Spanned};
use rill_tokens::token::TokenKind;

/// An expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Number(Number),
    Parenthese(ParentheseExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
    Comparison(Comparison),
}

impl Spanned for Expr {
    fn location(&self) -> Location {
        match self {
            Expr::Identifier(node) => node.location.clone(),
            Expr::Number(node) => node.location.clone(),
            Expr::Parenthese(node) => node.location.clone(),
            Expr::Unary(node) => node.location.clone(),
            Expr::Binary(node) => node.location.clone(),
            Expr::Comparison(node) => node.location.clone(),
        }
    }
}

/// A reference to a variable by name
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub location: Location,
}

/// A numeric literal
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: f64,
    pub location: Location,
}

/// A string literal, usable only as a `print` argument
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub location: Location,
}

/// An expression wrapped in parentheses
#[derive(Debug, Clone, PartialEq)]
pub struct ParentheseExpression {
    pub value: Box<Expr>,
    pub location: Location,
}

/// A signed expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub value: Box<Expr>,
    pub location: Location,
}

/// An arithmetic combination of two expressions
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub operator: ArithmeticOperator,
    pub location: Location,
}

/// A comparison of two expressions.
///
/// Comparisons chain left-associatively, so the result of one comparison can
/// itself be the left operand of the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub operator: ComparisonOperator,
    pub location: Location,
}

/// A sign applied to a single operand
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum UnaryOperator {
    #[strum(serialize = "+")]
    Positive,
    #[strum(serialize = "-")]
    Negative,
}

impl UnaryOperator {
    /// Gets the unary operator a token stands for, if any
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(UnaryOperator::Positive),
            TokenKind::Minus => Some(UnaryOperator::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ArithmeticOperator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    /// Lexed but never produced by the grammar
    #[strum(serialize = "%")]
    Modulo,
}

impl ArithmeticOperator {
    /// Gets the additive operator a token stands for, if any
    pub fn additive(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(ArithmeticOperator::Add),
            TokenKind::Minus => Some(ArithmeticOperator::Subtract),
            _ => None,
        }
    }

    /// Gets the multiplicative operator a token stands for, if any
    pub fn multiplicative(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Star => Some(ArithmeticOperator::Multiply),
            TokenKind::Div => Some(ArithmeticOperator::Divide),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ComparisonOperator {
    #[strum(serialize = "==")]
    Equal,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = "<=")]
    LessEqual,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = ">=")]
    GreaterEqual,
}

impl ComparisonOperator {
    /// Gets the comparison operator a token stands for, if any
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq => Some(ComparisonOperator::Equal),
            TokenKind::Neq => Some(ComparisonOperator::NotEqual),
            TokenKind::Lt => Some(ComparisonOperator::Less),
            TokenKind::Lte => Some(ComparisonOperator::LessEqual),
            TokenKind::Gt => Some(ComparisonOperator::Greater),
            TokenKind::Gte => Some(ComparisonOperator::GreaterEqual),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_spelling() {
        assert_eq!(ArithmeticOperator::Add.to_string(), "+");
        assert_eq!(ArithmeticOperator::Modulo.to_string(), "%");
        assert_eq!(ComparisonOperator::LessEqual.to_string(), "<=");
        assert_eq!(UnaryOperator::Negative.to_string(), "-");
    }

    #[test]
    fn test_operator_classification() {
        assert_eq!(ArithmeticOperator::additive(&TokenKind::Plus), Some(ArithmeticOperator::Add));
        assert_eq!(ArithmeticOperator::additive(&TokenKind::Star), None);
        assert_eq!(
            ArithmeticOperator::multiplicative(&TokenKind::Div),
            Some(ArithmeticOperator::Divide)
        );
        // the modulo token lexes but no grammar rule consumes it
        assert_eq!(ArithmeticOperator::multiplicative(&TokenKind::Rem), None);
        assert_eq!(
            ComparisonOperator::from_token(&TokenKind::Neq),
            Some(ComparisonOperator::NotEqual)
        );
        assert_eq!(ComparisonOperator::from_token(&TokenKind::Assign), None);
    }
}
