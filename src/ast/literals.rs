use std::fmt::Display;

use crate::Span;

use super::ast::Node;

/// Literal Kinds
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LiteralKind {
    NumericLiteral,
    StringLiteral,
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LiteralValue {
    Number(i64),
    /// Space-trimmed text, quotes included.
    String(String),
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Number(number) => write!(f, "{}", number),
            LiteralValue::String(string) => write!(f, "{}", string),
        }
    }
}

/// Literal
/// The classified right-hand side of a declarator.
#[derive(Debug, Clone)]
pub struct Literal {
    pub value: LiteralValue,
    /// Everything right of the first `=`, untrimmed.
    pub raw: String,
    pub span: Span,
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self.value {
            LiteralValue::Number(_) => LiteralKind::NumericLiteral,
            LiteralValue::String(_) => LiteralKind::StringLiteral,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.value {
            LiteralValue::Number(number) => Some(number),
            LiteralValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::Number(_) => None,
            LiteralValue::String(string) => Some(string),
        }
    }
}

impl Node for Literal {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
