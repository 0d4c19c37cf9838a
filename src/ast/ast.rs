use std::fmt::{Debug, Display};

use crate::{parser::lookups::BINDING_LOOKUP, Span};

use super::literals::Literal;

/// Node Trait
///
/// Shared behaviour of every node in the tree.
pub trait Node: Debug {
    /// Returns the span of the node in the parsed source.
    fn get_span(&self) -> &Span;
}

/// The closed set of conventional binding keywords.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Binding {
    Const,
    Let,
    Var,
}

impl Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Const => write!(f, "const"),
            Binding::Let => write!(f, "let"),
            Binding::Var => write!(f, "var"),
        }
    }
}

/// Root of the tree: the declarations in source order.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<Declaration>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Node for Program {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, declaration) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", declaration)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Declaration {
    /// Keyword text as written, not checked against [`Binding`].
    pub kind: String,
    pub declarator: Declarator,
    pub span: Span,
}

impl Declaration {
    /// Maps `kind` onto the conventional keywords, `None` for anything else.
    pub fn binding(&self) -> Option<Binding> {
        BINDING_LOOKUP.get(self.kind.as_str()).copied()
    }
}

impl Node for Declaration {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.declarator)
    }
}

#[derive(Debug, Clone)]
pub struct Declarator {
    pub identifier: String,
    /// `None` when the left-hand side has no `:`.
    pub type_annotation: Option<String>,
    pub value: Literal,
    pub span: Span,
}

impl Node for Declarator {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Declarator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(type_annotation) = &self.type_annotation {
            write!(f, ": {}", type_annotation)?;
        }
        write!(f, " = {}", self.value)
    }
}
