use super::*;
use crate::ast::{Enum, Interface, MemberFlags, ParameterFlags, Typedef};
use crate::Span;
use pretty_assertions::assert_eq;

fn meta(start: u32, end: u32) -> NodeMeta {
    NodeMeta::new(Span::new(start, end))
}

/// `typedef unsigned long? Id;` with a leading comment.
fn typedef_file() -> File {
    let mut typedef_meta = meta(9, 35);
    typedef_meta.comments.push("// ids".to_string());
    File {
        meta: meta(0, 35),
        declarations: vec![Declaration::Typedef(Typedef {
            meta: typedef_meta,
            name: "Id".to_string(),
            annotations: Vec::new(),
            ty: Type::named(meta(17, 29), "unsigned long").into_nullable(meta(17, 30)),
        })],
    }
}

#[test]
fn dumps_spans_and_comments() {
    let expected = "\
File @0..=35
  Typedef @9..=35
    comments:
      \"// ids\"
    name: \"Id\"
    type:
      Nullable @17..=30
        inner:
          Named @17..=29
            name: \"unsigned long\"
";
    assert_eq!(dump(&typedef_file()), expected);
}

#[test]
fn structure_only_drops_spans_and_comments() {
    let expected = "\
File
  Typedef
    name: \"Id\"
    type:
      Nullable
        inner:
          Named
            name: \"unsigned long\"
";
    assert_eq!(dump_with(&typedef_file(), DumpOptions::STRUCTURE), expected);
}

#[test]
fn dumps_members_flags_and_errors() {
    let mut member_meta = meta(16, 40);
    member_meta.errors.push(ErrorNode {
        span: Span::new(41, 41),
        comments: Vec::new(),
        message: "Expected `;`, found `}`".to_string(),
    });
    let file = File {
        meta: meta(0, 43),
        declarations: vec![Declaration::Interface(Interface {
            meta: meta(0, 43),
            name: "Foo".to_string(),
            partial: true,
            inherits: Some("Bar".to_string()),
            annotations: vec![Annotation {
                meta: meta(1, 14),
                name: "Exposed".to_string(),
                payload: AnnotationPayload::Values(vec!["Window".to_string()]),
            }],
            members: vec![Member {
                meta: member_meta,
                name: Some("x".to_string()),
                ty: Type::named(meta(34, 37), "long"),
                flags: MemberFlags::READONLY | MemberFlags::ATTRIBUTE,
                ..Member::default()
            }],
            ..Interface::default()
        })],
    };

    let expected = "\
File
  Interface
    name: \"Foo\"
    annotations:
      Annotation
        name: \"Exposed\"
        values:
          \"Window\"
    partial: true
    inherits: \"Bar\"
    members:
      Member
        errors:
          Error \"Expected `;`, found `}`\"
        name: \"x\"
        flags: readonly | attribute
        type:
          Named
            name: \"long\"
";
    assert_eq!(dump_with(&file, DumpOptions::STRUCTURE), expected);
}

#[test]
fn dumps_operations_and_literals() {
    let file = File {
        meta: meta(0, 0),
        declarations: vec![
            Declaration::Interface(Interface {
                name: "Foo".to_string(),
                members: vec![Member {
                    name: Some("bar".to_string()),
                    ty: Type::named(meta(0, 0), "void"),
                    parameters: vec![Parameter {
                        name: "y".to_string(),
                        ty: Type::named(meta(0, 0), "DOMString"),
                        flags: ParameterFlags::OPTIONAL,
                        default: Some(Literal::basic(meta(0, 0), "\"a\"")),
                        ..Parameter::default()
                    }],
                    ..Member::default()
                }],
                ..Interface::default()
            }),
            Declaration::Enum(Enum {
                name: "E".to_string(),
                values: vec![Literal {
                    meta: meta(0, 0),
                    kind: LiteralKind::Sequence(Vec::new()),
                }],
                ..Enum::default()
            }),
        ],
    };

    let expected = "\
File
  Interface
    name: \"Foo\"
    members:
      Member
        name: \"bar\"
        type:
          Named
            name: \"void\"
        parameters:
          Parameter
            name: \"y\"
            flags: optional
            type:
              Named
                name: \"DOMString\"
            default:
              Literal
                text: \"\\\"a\\\"\"
  Enum
    name: \"E\"
    values:
      SequenceLiteral
";
    assert_eq!(dump_with(&file, DumpOptions::STRUCTURE), expected);
}

#[test]
fn empty_annotation_parameters_are_kept_apart_from_bare_names() {
    let annotation = |payload| {
        File {
            meta: meta(0, 0),
            declarations: vec![Declaration::Interface(Interface {
                annotations: vec![Annotation {
                    meta: meta(0, 0),
                    name: "Constructor".to_string(),
                    payload,
                }],
                ..Interface::default()
            })],
        }
    };
    let bare = dump_with(&annotation(AnnotationPayload::None), DumpOptions::STRUCTURE);
    let called = dump_with(
        &annotation(AnnotationPayload::Parameters(Vec::new())),
        DumpOptions::STRUCTURE,
    );
    assert!(called.contains("parameters: []"));
    assert!(!bare.contains("parameters"));
}
