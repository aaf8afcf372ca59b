use super::*;
use pretty_assertions::assert_eq;
use widl_ir::{Declaration, File, Member};

fn interface_members(source: &str) -> Vec<Member> {
    let file: File = widl_parse::parse(source);
    assert!(!file.has_errors(), "{:?}", file.errors());
    match file.declarations.into_iter().next() {
        Some(Declaration::Interface(interface)) => interface.members,
        other => panic!("expected an interface, got {other:?}"),
    }
}

fn member_type(type_source: &str) -> String {
    let members = interface_members(&format!("interface I {{ attribute {type_source} x; }};"));
    format_type(&members[0].ty)
}

#[test]
fn types() {
    assert_eq!(member_type("any"), "any");
    assert_eq!(member_type("unsigned  long"), "unsigned long");
    assert_eq!(member_type("sequence< long >"), "sequence<long>");
    assert_eq!(member_type("record<DOMString,any>"), "record<DOMString, any>");
    assert_eq!(member_type("( A or B? )?"), "(A or B?)?");
    assert_eq!(member_type("Map<K,V,>"), "Map<K, V>");
    assert_eq!(member_type("Empty<>"), "Empty<>");
}

#[test]
fn parameters_and_literals() {
    let members = interface_members(
        "interface I { void f([Clamp] optional long a = -1, any... rest, sequence<long> s = [1,[]]); };",
    );
    assert_eq!(
        format_parameters(&members[0].parameters),
        "([Clamp] optional long a = -1, any... rest, sequence<long> s = [1, []])"
    );
    assert_eq!(format_parameters(&[]), "()");

    let default = members[0].parameters[2].default.as_ref();
    assert_eq!(default.map(format_literal).as_deref(), Some("[1, []]"));
}

#[test]
fn annotation_groups() {
    let file = widl_parse::parse(
        "[A, B = C, D = ( E ,F ), G(), H(long x)] interface I {};",
    );
    let annotations = file.declarations[0].annotations();
    assert_eq!(
        format_annotations(annotations),
        "[A, B=C, D=(E, F), G(), H(long x)]"
    );
    assert_eq!(format_annotations(&[]), "");
}

#[test]
fn deeply_nested_fragments() {
    let depth = 50_000;
    let ty = format!("{}long{}", "sequence<".repeat(depth), ">".repeat(depth));
    assert_eq!(member_type(&ty), ty);

    let value = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let members = interface_members(&format!("interface I {{ void f(any a = {value}); }};"));
    let default = members[0].parameters[0].default.as_ref();
    assert_eq!(default.map(format_literal), Some(value));
}
