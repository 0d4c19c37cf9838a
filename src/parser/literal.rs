use crate::{
    ast::literals::{Literal, LiteralValue},
    MK_SPAN,
};

use super::parser::Parser;

/// Classifies the text right of `=`.
///
/// Only spaces are trimmed, so quotes stay part of a string value. Only whole
/// `i64` integers are numeric: `45.123`, `1e3` and out-of-range integers all
/// come back as strings.
pub fn classify_value(raw: &str) -> LiteralValue {
    let trimmed = raw.trim_matches(' ');

    match trimmed.parse::<i64>() {
        Ok(number) => LiteralValue::Number(number),
        Err(_) => LiteralValue::String(String::from(trimmed)),
    }
}

pub fn classify_literal(parser: &Parser, raw: &str, offset: usize) -> Literal {
    Literal {
        value: classify_value(raw),
        raw: String::from(raw),
        span: MK_SPAN!(offset, offset + raw.len(), parser.file()),
    }
}
