use crate::grammar::tests::{error_messages, parse_clean};
use crate::parse;
use pretty_assertions::assert_eq;
use widl_ir::{Annotation, AnnotationPayload, File, Node};

fn annotations(file: &File) -> &[Annotation] {
    match file.declarations.first() {
        Some(declaration) => declaration.annotations(),
        None => panic!("expected a declaration"),
    }
}

#[test]
fn payload_forms() {
    let file = parse_clean(
        "[NoInterfaceObject, Exposed=Window, Global=(Window, Worker), Constructor()] \
         interface Foo {};",
    );
    let payloads: Vec<_> = annotations(&file)
        .iter()
        .map(|a| (a.name.as_str(), a.payload.clone()))
        .collect();
    assert_eq!(
        payloads,
        vec![
            ("NoInterfaceObject", AnnotationPayload::None),
            ("Exposed", AnnotationPayload::Value("Window".to_string())),
            (
                "Global",
                AnnotationPayload::Values(vec!["Window".to_string(), "Worker".to_string()])
            ),
            ("Constructor", AnnotationPayload::Parameters(Vec::new())),
        ]
    );
}

#[test]
fn accessors() {
    let file = parse_clean("[A=B, C=(D), E(long x)] interface Foo {};");
    let [a, c, e] = annotations(&file) else {
        panic!("expected three annotations");
    };
    assert_eq!(a.value(), Some("B"));
    assert_eq!(c.values(), ["D".to_string()]);
    assert_eq!(e.parameters()[0].name, "x");
    assert_eq!(a.parameters().len(), 0);
}

#[test]
fn multiple_groups_concatenate() {
    let file = parse_clean("[A] [B, C] interface Foo {};");
    let names: Vec<_> = annotations(&file).iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn annotation_span() {
    let source = "[Exposed=(Window, Worker)] interface Foo {};";
    let file = parse_clean(source);
    assert_eq!(
        annotations(&file)[0].span().slice(source),
        Some("Exposed=(Window, Worker)")
    );
}

#[test]
fn values_must_be_identifiers() {
    let file = parse("[Exposed=\"Window\"] interface Foo {};");
    let errors = error_messages(&file);
    assert!(
        errors.contains(&"Expected identifier, found string `\"Window\"`".to_string()),
        "{errors:?}"
    );
}

#[test]
fn unclosed_group() {
    let file = parse("[A interface Foo {};");
    assert_eq!(
        error_messages(&file)[0],
        "Expected `]`, found identifier `interface`"
    );
}

#[test]
fn annotations_nested_through_parameters() {
    // Each `A(...)` takes one parameter annotated with the next group.
    let depth = 50_000;
    let source = format!(
        "{}{}{} interface Foo {{}};",
        "[A(".repeat(depth),
        ")] long x".repeat(depth - 1),
        ")]"
    );
    let file = parse_clean(&source);
    let mut annotation = &annotations(&file)[0];
    let mut levels = 1;
    while let Some(parameter) = annotation.parameters().first() {
        assert_eq!(parameter.name, "x");
        levels += 1;
        annotation = &parameter.annotations[0];
    }
    assert_eq!(levels, depth);
    drop(file);
}
