//! Statement splitting for the parser.
//!
//! Cuts a source blob into declaration statements on every `;`. The split is
//! a plain delimiter split: it does not look inside quotes, and it keeps the
//! whitespace around each statement for the declaration parser to trim.

pub mod splitter;
