use super::*;
use pretty_assertions::assert_eq;

fn format(source: &str) -> String {
    let file = widl_parse::parse(source);
    assert!(!file.has_errors(), "{:?}", file.errors());
    format_file(&file)
}

#[test]
fn interface_in_canonical_layout() {
    let source = "[Exposed=Window]interface   Node:EventTarget{const unsigned short A=1;\
                  readonly attribute DOMString nodeName;Node?appendChild(Node child);\
                  getter Node?(unsigned long index);};";
    let expected = "\
[Exposed=Window]
interface Node : EventTarget {
    const unsigned short A = 1;
    readonly attribute DOMString nodeName;
    Node? appendChild(Node child);
    getter Node? (unsigned long index);
};
";
    assert_eq!(format(source), expected);
}

#[test]
fn body_items_keep_source_order() {
    let source = "interface I { serializer; iterable<K, V>; attribute long a; stringifier; };";
    let expected = "\
interface I {
    serializer;
    iterable<K, V>;
    attribute long a;
    stringifier;
};
";
    assert_eq!(format(source), expected);
}

#[test]
fn declarations_are_separated_by_blank_lines() {
    let source = "typedef long T; enum E { \"a\", \"b\", }; A implements B; A includes C;\
                  callback Bare; callback Cb = void (optional any... xs);";
    let expected = "\
typedef long T;

enum E {
    \"a\",
    \"b\"
};

A implements B;

A includes C;

callback Bare;

callback Cb = void (optional any... xs);
";
    assert_eq!(format(source), expected);
}

#[test]
fn dictionaries_omit_the_implicit_attribute() {
    let source = "partial dictionary D : Base { required long a; sequence<long> b = []; Inner c = {}; };";
    let expected = "\
partial dictionary D : Base {
    required long a;
    sequence<long> b = [];
    Inner c = {};
};
";
    assert_eq!(format(source), expected);
}

#[test]
fn empty_bodies_stay_on_one_line() {
    assert_eq!(
        format("callback interface L {}; interface mixin M {}; dictionary D {};"),
        "callback interface L {};\n\ninterface mixin M {};\n\ndictionary D {};\n"
    );
}

#[test]
fn comments_precede_their_node() {
    let source = "// The node.\ninterface N {\n  /* count */ attribute long n;\n};";
    let expected = "\
// The node.
interface N {
    /* count */
    attribute long n;
};
";
    assert_eq!(format(source), expected);
}

#[test]
fn member_annotations_stay_inline() {
    let source = "interface I { [Replaceable] readonly attribute long a; void f([Clamp] octet x); };";
    let expected = "\
interface I {
    [Replaceable] readonly attribute long a;
    void f([Clamp] octet x);
};
";
    assert_eq!(format(source), expected);
}

#[test]
fn error_declarations_print_nothing() {
    let file = widl_parse::parse("[A] widget W { x }; typedef long T;");
    assert_eq!(format_file(&file), "typedef long T;\n");
}

#[test]
fn empty_file() {
    assert_eq!(format(""), "");
}
