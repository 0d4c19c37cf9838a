//! Unit tests for the tree nodes and their serialization.

use pretty_assertions::assert_eq;

use crate::ast::ast::{Binding, Declaration, Node, Program};
use crate::ast::literals::{LiteralKind, LiteralValue};
use crate::parse_program;

/// Everything but spans and raw text, which depend on the exact layout.
fn shape(program: &Program) -> Vec<(String, String, Option<String>, LiteralValue)> {
    program
        .iter()
        .map(|Declaration { kind, declarator, .. }| {
            (
                kind.clone(),
                declarator.identifier.clone(),
                declarator.type_annotation.clone(),
                declarator.value.value.clone(),
            )
        })
        .collect()
}

#[test]
fn test_binding_display() {
    assert_eq!(Binding::Const.to_string(), "const");
    assert_eq!(Binding::Let.to_string(), "let");
    assert_eq!(Binding::Var.to_string(), "var");
}

#[test]
fn test_literal_kind_display() {
    assert_eq!(LiteralKind::NumericLiteral.to_string(), "NumericLiteral");
    assert_eq!(LiteralKind::StringLiteral.to_string(), "StringLiteral");
}

#[test]
fn test_program_display() {
    let program =
        parse_program("const foo : string = 'hello there';\n var bar:number=45.123; let n=-3")
            .unwrap();

    assert_eq!(
        program.to_string(),
        "const foo: string = 'hello there'; var bar: number = 45.123; let n = -3"
    );
}

#[test]
fn test_reparse_serialized_program() {
    let sources = [
        "const a = 1",
        "const a = 1; let b = 2",
        "var foo = 'hello'",
        "const foo : string = 'hello world'",
        "\n const foo : string = 'hello there';\n var bar:number=45.123\n",
        "let a:b:c = x = y",
        "int 1x = \t5",
        "let = ",
        "let a: = 007",
    ];

    for source in sources {
        let program = parse_program(source).unwrap();
        let serialized = program.to_string();
        let reparsed = parse_program(&serialized).unwrap();

        assert_eq!(shape(&program), shape(&reparsed), "source {:?}", source);
    }
}

#[test]
fn test_literal_accessors() {
    let program = parse_program("let a = 12; let b = '12'").unwrap();

    let number = &program.body[0].declarator.value;
    assert_eq!(number.as_number(), Some(12));
    assert_eq!(number.as_str(), None);

    let string = &program.body[1].declarator.value;
    assert_eq!(string.as_number(), None);
    assert_eq!(string.as_str(), Some("'12'"));
}

#[test]
fn test_node_spans_nest() {
    let program = parse_program("  let abc = 1  ").unwrap();
    let declaration = &program.body[0];

    assert!(declaration.get_span().start.0 >= program.get_span().start.0);
    assert!(declaration.declarator.get_span().start.0 > declaration.get_span().start.0);
    assert_eq!(
        declaration.declarator.value.get_span().end.0,
        declaration.get_span().end.0
    );
    assert_eq!(declaration.declarator.value.get_span().len(), 2);
}
