//! Error types and error handling for the parser.
//!
//! Every error carries the byte position in the source where the failing
//! statement or declarator starts, so it can be rendered with
//! [`crate::format_error`].

pub mod errors;
