//! Parser module for building the declaration tree.
//!
//! There is no token stream: each statement from the splitter is cut at the
//! first space (keyword / declarator), the declarator at the first `=`
//! (left-hand side / raw value) and the de-spaced left-hand side at the first
//! `:` (identifier / type annotation). The raw value is then classified as a
//! numeric or string literal.
//!
//! Parsing is fail-fast: the first statement that cannot be cut aborts the
//! whole parse.

pub mod literal;
pub mod lookups;
pub mod parser;
pub mod stmt;
