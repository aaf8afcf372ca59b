use crate::grammar::tests::{error_messages, parse_clean};
use crate::parse;
use pretty_assertions::assert_eq;
use widl_ir::{Declaration, File, Parameter, ParameterFlags};

fn callback_parameters(file: &File) -> &[Parameter] {
    match file.declarations.first() {
        Some(Declaration::Callback(callback)) => &callback.parameters,
        other => panic!("expected a callback, got {other:?}"),
    }
}

#[test]
fn empty_list() {
    let file = parse_clean("callback Cb = void ();");
    assert!(callback_parameters(&file).is_empty());
}

#[test]
fn flags_names_and_defaults() {
    let file = parse_clean(
        "callback Cb = void ([Clamp] octet a, optional boolean b = true, long... rest);",
    );
    let [a, b, rest] = callback_parameters(&file) else {
        panic!("expected three parameters");
    };

    assert_eq!(a.name, "a");
    assert_eq!(a.flags, ParameterFlags::empty());
    assert_eq!(a.annotations[0].name, "Clamp");

    assert_eq!(b.flags, ParameterFlags::OPTIONAL);
    assert_eq!(b.default.as_ref().and_then(|d| d.text()), Some("true"));

    assert_eq!(rest.flags, ParameterFlags::VARIADIC);
    assert_eq!(rest.ty.name(), Some("long"));
}

#[test]
fn parameter_span_covers_annotations_and_default() {
    let source = "callback Cb = void ([Clamp] optional octet a = 1);";
    let file = parse_clean(source);
    let [a] = callback_parameters(&file) else {
        panic!("expected one parameter");
    };
    assert_eq!(a.meta.span.slice(source), Some("[Clamp] optional octet a = 1"));
}

#[test]
fn missing_separator_stops_the_list() {
    let file = parse("callback Cb = void (long a long b);");
    let [a] = callback_parameters(&file) else {
        panic!("expected one parameter");
    };
    assert_eq!(a.name, "a");
    assert_eq!(
        error_messages(&file)[1],
        "Expected `)` or `,`, found identifier `long`"
    );
}

#[test]
fn trailing_comma_is_an_error() {
    let file = parse("callback Cb = void (long a,);");
    let parameters = callback_parameters(&file);
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[1].name, "");
    assert_eq!(
        error_messages(&file),
        vec![
            "Expected identifier, found `)`",
            "Expected identifier, found `)`",
        ]
    );
}
