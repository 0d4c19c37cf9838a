use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::ast::Binding;

lazy_static! {
    pub static ref BINDING_LOOKUP: HashMap<&'static str, Binding> = {
        let mut map = HashMap::new();
        map.insert("const", Binding::Const);
        map.insert("let", Binding::Let);
        map.insert("var", Binding::Var);
        map
    };

    /// Identifiers and type annotations accepted in strict mode.
    pub static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub fn is_known_binding(kind: &str) -> bool {
    BINDING_LOOKUP.contains_key(kind)
}

pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(identifier)
}
