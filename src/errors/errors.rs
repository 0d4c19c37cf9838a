use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingDeclarationKeyword { .. } => "MissingDeclarationKeyword",
            ErrorImpl::MissingAssignmentOperator { .. } => "MissingAssignmentOperator",
            ErrorImpl::UnknownDeclarationKind { .. } => "UnknownDeclarationKind",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::InvalidTypeAnnotation { .. } => "InvalidTypeAnnotation",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingDeclarationKeyword { statement } if statement.is_empty() => {
                ErrorTip::Suggestion(String::from(
                    "Empty statement, is there a trailing or doubled `;`?",
                ))
            }
            ErrorImpl::MissingDeclarationKeyword { statement } => ErrorTip::Suggestion(format!(
                "Could not find ' ' in `{}`, expected `<keyword> <declarator>`",
                statement
            )),
            ErrorImpl::MissingAssignmentOperator { declarator } => ErrorTip::Suggestion(format!(
                "Could not find `=` in `{}`, every declaration needs a value",
                declarator
            )),
            ErrorImpl::UnknownDeclarationKind { kind } => ErrorTip::Suggestion(format!(
                "Unknown declaration kind `{}`, expected one of `const`, `let`, `var`",
                kind
            )),
            ErrorImpl::InvalidIdentifier { .. } => ErrorTip::None,
            ErrorImpl::InvalidTypeAnnotation { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("[VariableDeclaration] could not find ' ' in {statement:?}")]
    MissingDeclarationKeyword { statement: String },
    #[error("[VariableDeclarator] could not find '=' in {declarator:?}")]
    MissingAssignmentOperator { declarator: String },
    #[error("unknown declaration kind {kind:?}")]
    UnknownDeclarationKind { kind: String },
    #[error("invalid identifier {identifier:?}")]
    InvalidIdentifier { identifier: String },
    #[error("invalid type annotation {type_annotation:?}")]
    InvalidTypeAnnotation { type_annotation: String },
}
