use super::*;
use crate::Span;
use pretty_assertions::assert_eq;

fn meta(start: u32, end: u32) -> NodeMeta {
    NodeMeta::new(Span::new(start, end))
}

fn error(at: u32, message: &str) -> ErrorNode {
    ErrorNode {
        span: Span::new(at, at),
        comments: Vec::new(),
        message: message.to_string(),
    }
}

#[test]
fn into_nullable_wraps_once() {
    let base = Type::named(meta(0, 3), "long");
    let nullable = base.clone().into_nullable(meta(0, 4));
    assert!(nullable.is_nullable());
    assert_eq!(nullable.children(), vec![&base]);

    let again = nullable.clone().into_nullable(meta(0, 5));
    assert_eq!(again, nullable);
}

#[test]
fn type_names() {
    let named = Type::named(meta(0, 0), "DOMString");
    assert_eq!(named.name(), Some("DOMString"));

    let promise = Type::new(
        meta(0, 0),
        TypeKind::Parametrized {
            name: "Promise".to_string(),
            arguments: vec![Type::named(meta(0, 0), "void")],
        },
    );
    assert_eq!(promise.name(), Some("Promise"));
    assert_eq!(promise.children().len(), 1);

    assert_eq!(Type::new(meta(0, 0), TypeKind::Any).name(), None);
    assert_eq!(Type::default().name(), Some(""));
}

#[test]
fn literal_string_value_strips_quotes() {
    let string = Literal::basic(meta(0, 4), "\"red\"");
    assert_eq!(string.text(), Some("\"red\""));
    assert_eq!(string.string_value(), Some("red"));

    let ident = Literal::basic(meta(0, 3), "null");
    assert_eq!(ident.string_value(), None);

    let lone_quote = Literal::basic(meta(0, 0), "\"");
    assert_eq!(lone_quote.string_value(), None);

    let sequence = Literal {
        meta: meta(0, 1),
        kind: LiteralKind::Sequence(Vec::new()),
    };
    assert_eq!(sequence.text(), None);
}

#[test]
fn member_flag_helpers() {
    let member = Member {
        flags: MemberFlags::READONLY | MemberFlags::ATTRIBUTE,
        ..Member::default()
    };
    assert!(member.is_readonly());
    assert!(member.is_attribute());
    assert!(!member.is_operation());
    assert!(!member.is_const());

    let operation = Member::default();
    assert!(operation.is_operation());

    let constant = Member {
        flags: MemberFlags::CONST,
        ..Member::default()
    };
    assert!(!constant.is_operation());
}

#[test]
fn specialization_keywords() {
    for specialization in Specialization::ALL {
        assert_eq!(
            Specialization::from_keyword(specialization.keyword()),
            Some(specialization)
        );
    }
    assert_eq!(Specialization::from_keyword("static"), None);
}

#[test]
fn annotation_payload_accessors() {
    let exposed = Annotation {
        meta: meta(1, 14),
        name: "Exposed".to_string(),
        payload: AnnotationPayload::Value("Window".to_string()),
    };
    assert_eq!(exposed.value(), Some("Window"));
    assert!(exposed.values().is_empty());
    assert!(exposed.parameters().is_empty());

    let bare = Annotation::default();
    assert_eq!(bare.payload, AnnotationPayload::None);
    assert_eq!(bare.value(), None);
}

#[test]
fn declaration_accessors_delegate() {
    let mut declaration = Declaration::Enum(Enum {
        meta: meta(0, 20),
        name: "Color".to_string(),
        ..Enum::default()
    });
    assert_eq!(declaration.name(), Some("Color"));
    assert_eq!(declaration.kind_name(), "enum");
    assert_eq!(declaration.span(), Span::new(0, 20));

    declaration.meta_mut().span = Span::new(2, 20);
    assert_eq!(declaration.span(), Span::new(2, 20));

    let placeholder = Declaration::Error(ErrorDeclaration::default());
    assert_eq!(placeholder.name(), None);
    assert_eq!(placeholder.kind_name(), "error");
}

#[test]
fn file_rolls_up_errors_in_tree_order() {
    let mut file_meta = meta(0, 40);
    file_meta.errors.push(error(39, "root"));

    let mut member_meta = meta(10, 20);
    member_meta.errors.push(error(15, "member"));

    let mut type_meta = meta(10, 13);
    type_meta.errors.push(error(11, "type"));

    let file = File {
        meta: file_meta,
        declarations: vec![Declaration::Interface(Interface {
            meta: meta(0, 30),
            name: "Foo".to_string(),
            members: vec![Member {
                meta: member_meta,
                ty: Type::named(type_meta, "long"),
                ..Member::default()
            }],
            ..Interface::default()
        })],
    };

    let messages: Vec<_> = file.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["root", "member", "type"]);
    assert!(file.has_errors());
    assert!(!File::default().has_errors());
}

const DEEP: usize = 100_000;

#[test]
fn deep_types_drop_and_walk() {
    let mut ty = Type::named(meta(0, 0), "long");
    for _ in 0..DEEP {
        let kind = TypeKind::Sequence {
            element: Box::new(ty),
        };
        ty = Type::new(meta(0, 0), kind);
    }
    let file = File {
        declarations: vec![Declaration::Typedef(Typedef {
            name: "T".to_string(),
            ty,
            ..Typedef::default()
        })],
        ..File::default()
    };
    assert!(!file.has_errors());
    drop(file);
}

#[test]
fn deep_sequence_literals_drop() {
    let mut literal = Literal::basic(meta(0, 0), "1");
    for _ in 0..DEEP {
        literal = Literal::new(meta(0, 0), LiteralKind::Sequence(vec![literal]));
    }
    drop(literal);
}

#[test]
fn annotations_nested_through_parameters_drop() {
    let mut annotation = Annotation::default();
    for _ in 0..DEEP {
        let parameter = Parameter {
            name: "x".to_string(),
            annotations: vec![annotation],
            ..Parameter::default()
        };
        annotation = Annotation {
            meta: meta(0, 0),
            name: "A".to_string(),
            payload: AnnotationPayload::Parameters(vec![parameter]),
        };
    }
    drop(annotation);
}
