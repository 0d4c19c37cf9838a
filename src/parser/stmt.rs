use crate::{
    ast::ast::{Declaration, Declarator},
    errors::errors::{Error, ErrorImpl},
    splitter::splitter::Segment,
    MK_SPAN,
};

use super::{
    literal::classify_literal,
    lookups::{is_known_binding, is_valid_identifier},
    parser::Parser,
};

/// Parses one statement: `<keyword> <declarator>`.
pub fn parse_declaration(parser: &Parser, segment: Segment) -> Result<Declaration, Error> {
    let statement = segment.text.trim();
    let start = segment.offset + (segment.text.len() - segment.text.trim_start().len());

    let Some((kind, declarator_text)) = statement.split_once(' ') else {
        return Err(Error::new(
            ErrorImpl::MissingDeclarationKeyword {
                statement: String::from(statement),
            },
            parser.get_position(start),
        ));
    };

    if parser.config().strict_keywords && !is_known_binding(kind) {
        return Err(Error::new(
            ErrorImpl::UnknownDeclarationKind {
                kind: String::from(kind),
            },
            parser.get_position(start),
        ));
    }

    let declarator = parse_declarator(parser, declarator_text, start + kind.len() + 1)?;

    Ok(Declaration {
        kind: String::from(kind),
        declarator,
        span: MK_SPAN!(start, start + statement.len(), parser.file()),
    })
}

/// Parses `<identifier>[:<type>] = <value>`, where `offset` is the position
/// of `text` in the source.
pub fn parse_declarator(parser: &Parser, text: &str, offset: usize) -> Result<Declarator, Error> {
    let Some(assignment) = text.find('=') else {
        return Err(Error::new(
            ErrorImpl::MissingAssignmentOperator {
                declarator: String::from(text),
            },
            parser.get_position(offset),
        ));
    };

    let raw = &text[assignment + 1..];
    let value = classify_literal(parser, raw, offset + assignment + 1);

    // Every space goes, not just the outer ones: `foo : string` -> `foo:string`.
    let left = text[..assignment].replace(' ', "");

    let (identifier, type_annotation) = match left.find(':') {
        Some(colon) => (
            String::from(&left[..colon]),
            Some(String::from(&left[colon + 1..])),
        ),
        None => (left, None),
    };

    if parser.config().strict_identifiers {
        if !is_valid_identifier(&identifier) {
            return Err(Error::new(
                ErrorImpl::InvalidIdentifier { identifier },
                parser.get_position(offset),
            ));
        }

        if let Some(type_annotation) = &type_annotation {
            if !is_valid_identifier(type_annotation) {
                return Err(Error::new(
                    ErrorImpl::InvalidTypeAnnotation {
                        type_annotation: type_annotation.clone(),
                    },
                    parser.get_position(offset),
                ));
            }
        }
    }

    Ok(Declarator {
        identifier,
        type_annotation,
        value,
        span: MK_SPAN!(offset, offset + text.len(), parser.file()),
    })
}
