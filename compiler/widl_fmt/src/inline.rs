//! Single-line fragments.
//!
//! Types, literals, parameter lists and annotation groups never break
//! across lines, so they are rendered straight into a `String`.

use widl_ir::{
    Annotation, AnnotationPayload, Literal, LiteralKind, Parameter, Type, TypeKind,
};
use widl_stack::ensure_sufficient_stack;

pub fn format_type(ty: &Type) -> String {
    let mut out = String::new();
    write_type(&mut out, ty);
    out
}

fn write_type(out: &mut String, ty: &Type) {
    ensure_sufficient_stack(|| {
        match &ty.kind {
            TypeKind::Any => out.push_str("any"),
            TypeKind::Named { name } => out.push_str(name),
            TypeKind::Parametrized { name, arguments } => {
                out.push_str(name);
                out.push('<');
                write_separated(out, arguments, ", ", write_type);
                out.push('>');
            }
            TypeKind::Sequence { element } => {
                out.push_str("sequence<");
                write_type(out, element);
                out.push('>');
            }
            TypeKind::Record { key, value } => {
                out.push_str("record<");
                write_type(out, key);
                out.push_str(", ");
                write_type(out, value);
                out.push('>');
            }
            TypeKind::Union { members } => {
                out.push('(');
                write_separated(out, members, " or ", write_type);
                out.push(')');
            }
            TypeKind::Nullable { inner } => {
                write_type(out, inner);
                out.push('?');
            }
        }
    });
}

pub fn format_literal(literal: &Literal) -> String {
    let mut out = String::new();
    write_literal(&mut out, literal);
    out
}

fn write_literal(out: &mut String, literal: &Literal) {
    ensure_sufficient_stack(|| {
        match &literal.kind {
            LiteralKind::Basic(text) => out.push_str(text),
            LiteralKind::Sequence(items) => {
                out.push('[');
                write_separated(out, items, ", ", write_literal);
                out.push(']');
            }
        }
    });
}

/// `(a, optional long b = 1)`, parentheses included.
pub fn format_parameters(parameters: &[Parameter]) -> String {
    let mut out = String::from("(");
    write_separated(&mut out, parameters, ", ", write_parameter);
    out.push(')');
    out
}

fn write_parameter(out: &mut String, parameter: &Parameter) {
    if !parameter.annotations.is_empty() {
        out.push_str(&format_annotations(&parameter.annotations));
        out.push(' ');
    }
    if parameter.is_optional() {
        out.push_str("optional ");
    }
    write_type(out, &parameter.ty);
    if parameter.is_variadic() {
        out.push_str("...");
    }
    out.push(' ');
    out.push_str(&parameter.name);
    if let Some(default) = &parameter.default {
        out.push_str(" = ");
        write_literal(out, default);
    }
}

/// `[A, B=C, D=(E, F), G(long x)]`. Empty input gives an empty string.
pub fn format_annotations(annotations: &[Annotation]) -> String {
    if annotations.is_empty() {
        return String::new();
    }
    let mut out = String::from("[");
    write_separated(&mut out, annotations, ", ", write_annotation);
    out.push(']');
    out
}

fn write_annotation(out: &mut String, annotation: &Annotation) {
    ensure_sufficient_stack(|| {
        out.push_str(&annotation.name);
        match &annotation.payload {
            AnnotationPayload::None => {}
            AnnotationPayload::Value(value) => {
                out.push('=');
                out.push_str(value);
            }
            AnnotationPayload::Values(values) => {
                out.push_str("=(");
                out.push_str(&values.join(", "));
                out.push(')');
            }
            AnnotationPayload::Parameters(parameters) => {
                out.push_str(&format_parameters(parameters));
            }
        }
    });
}

fn write_separated<T>(
    out: &mut String,
    items: &[T],
    separator: &str,
    mut write: impl FnMut(&mut String, &T),
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write(out, item);
    }
}

#[cfg(test)]
mod tests;
