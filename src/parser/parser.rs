//! Parser implementation for building the declaration tree.
//!
//! This module contains the Parser struct, which walks the statements
//! produced by the splitter and collects the parsed declarations, and the
//! `parse` entry point.

use std::rc::Rc;

use crate::{
    ast::ast::{Declaration, Program},
    errors::errors::Error,
    splitter::splitter::{split_statements, Segment},
    Position, MK_POSITION, MK_SPAN,
};

use super::stmt::parse_declaration;

/// Parser options. The default is permissive: any keyword and any
/// identifier text are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Reject keywords other than `const`, `let` and `var`.
    pub strict_keywords: bool,
    /// Reject identifiers and type annotations that are not `[a-zA-Z_][a-zA-Z0-9_]*`.
    pub strict_identifiers: bool,
}

impl ParserConfig {
    pub fn strict() -> Self {
        ParserConfig {
            strict_keywords: true,
            strict_identifiers: true,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The statements to parse
    segments: Vec<Segment<'a>>,
    /// Index of the next statement
    pos: usize,
    /// Length of the whole source in bytes
    source_len: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    config: ParserConfig,
    /// Declarations parsed so far, in source order
    declarations: Vec<Declaration>,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `source`, already split into statements.
    pub fn new(source: &'a str, file: Rc<String>, config: ParserConfig) -> Self {
        Parser {
            segments: split_statements(source),
            pos: 0,
            source_len: source.len(),
            file,
            config,
            declarations: vec![],
        }
    }

    /// Advances to the next statement and returns the previous one.
    pub fn advance(&mut self) -> Option<Segment<'a>> {
        let segment = self.segments.get(self.pos).copied();
        if segment.is_some() {
            self.pos += 1;
        }
        segment
    }

    /// Checks if there are more statements to parse.
    pub fn has_segments(&self) -> bool {
        self.pos < self.segments.len()
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Declarations parsed before a failure, the failing statement excluded.
    ///
    /// Empty after a successful `parse`, which moves them into the Program.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns a position `offset` bytes into the source.
    pub fn get_position(&self, offset: usize) -> Position {
        MK_POSITION!(offset, &self.file)
    }

    fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }
}

/// Parses every `;`-separated declaration in `source`.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the declarations parsed before a failure)
/// - Result containing either the Program or the first Error
pub fn parse<'a>(
    source: &'a str,
    file: Rc<String>,
    config: ParserConfig,
) -> (Parser<'a>, Result<Program, Error>) {
    let mut parser = Parser::new(source, file, config);

    while let Some(segment) = parser.advance() {
        match parse_declaration(&parser, segment) {
            Ok(declaration) => parser.push(declaration),
            Err(error) => return (parser, Err(error)),
        }
    }

    let program = Ok(Program {
        body: std::mem::take(&mut parser.declarations),
        span: MK_SPAN!(0, parser.source_len, &parser.file),
    });

    (parser, program)
}
