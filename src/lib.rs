#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    parser::parser::{parse, ParserConfig},
};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod splitter;

extern crate regex;

/// File label used when the source does not come from a file.
pub const SHELL_FILE: &str = "shell";

/// Byte offset into the parsed source, tagged with the file label.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses `source` with the permissive default configuration.
pub fn parse_program(source: &str) -> Result<Program, Error> {
    let (_, result) = parse(
        source,
        Rc::new(String::from(SHELL_FILE)),
        ParserConfig::default(),
    );
    result
}

/// Returns the 1-based line number, the line text (without its newline) and
/// the column of `position` inside that line, counted in characters.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let mut pos = (position as usize).min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }

    let before = &source[..pos];
    let line_number = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);

    (
        line_number,
        String::from(&source[line_start..line_end]),
        source[line_start..pos].chars().count(),
    )
}

/// Renders an error with the offending source line:
///
/// ```text
/// Error: MissingAssignmentOperator (Could not find `=` in `a 1`, ...)
/// -> shell
///   |
/// 1 | const a 1
///   | ------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position.1));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    output
}

pub fn display_error(error: &Error, source: &str) {
    eprintln!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "const a = 1;\n  let b = 2;\nvar c = 3";

        let (line_number, line, line_pos) = get_line_at_position(source, 6);
        assert_eq!(line_number, 1);
        assert_eq!(line, "const a = 1;");
        assert_eq!(line_pos, 6);

        let (line_number, line, line_pos) = get_line_at_position(source, 17);
        assert_eq!(line_number, 2);
        assert_eq!(line, "  let b = 2;");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position(source, 1000);
        assert_eq!(line_number, 3);
        assert_eq!(line, "var c = 3");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_at_position_empty_source() {
        assert_eq!(get_line_at_position("", 0), (1, String::new(), 0));
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(
            remove_starting_whitespace("  \tlet a = 1"),
            (String::from("let a = 1"), 3)
        );
        assert_eq!(remove_starting_whitespace("x"), (String::from("x"), 0));
    }

    #[test]
    fn test_format_error_points_at_declarator() {
        let source = "const a 1";
        let error = parse_program(source).unwrap_err();
        let rendered = format_error(&error, source);

        assert!(rendered.starts_with("Error: MissingAssignmentOperator"));
        assert!(rendered.contains("-> shell"));
        assert!(rendered.contains("1 | const a 1"));
        assert!(rendered.ends_with("  | ------^"));
    }

    #[test]
    fn test_format_error_caret_after_multibyte_characters() {
        let source = "let é = 1; const b 2";
        let error = parse_program(source).unwrap_err();

        let (_, _, column) = get_line_at_position(source, error.get_position().0);
        assert_eq!(column, 17);

        let rendered = format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();
        let source_line = lines[3];
        let caret_line = lines[4];

        let target = source_line.chars().position(|c| c == 'b').unwrap();
        let caret = caret_line.chars().position(|c| c == '^').unwrap();
        assert_eq!(caret, target);
    }

    #[test]
    fn test_parse_program_uses_shell_label() {
        let program = parse_program("let x = 1").unwrap();
        assert_eq!(program.span.start.1.as_str(), SHELL_FILE);
        assert_eq!(program.span.len(), 9);
    }
}
