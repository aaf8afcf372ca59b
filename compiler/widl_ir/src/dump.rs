//! Canonical text rendering of a tree.
//!
//! Used by golden tests and the `widl parse` command. One field per line,
//! children indented by two spaces, in declaration order. Absent optional
//! fields, false flags, and empty lists are left out, so two trees render
//! identically exactly when they are equal in every dumped field.
//!
//! ```text
//! File @0..=21
//!   Typedef @0..=21
//!     name: "Id"
//!     type:
//!       Named @8..=20
//!         name: "unsigned long"
//! ```

use widl_stack::ensure_sufficient_stack;

use crate::ast::{
    Annotation, AnnotationPayload, CustomOp, Declaration, ErrorNode, File, Iterable, Literal,
    LiteralKind, Member, Node, NodeMeta, Parameter, Type, TypeKind,
};

/// What [`dump_with`] includes besides the structure itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    /// Render `@start..=end` after each node label.
    pub spans: bool,
    /// Render attached comments.
    pub comments: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            spans: true,
            comments: true,
        }
    }
}

impl DumpOptions {
    /// Structure only: no spans, no comments.
    pub const STRUCTURE: DumpOptions = DumpOptions {
        spans: false,
        comments: false,
    };
}

/// Render every field of `file`.
pub fn dump(file: &File) -> String {
    dump_with(file, DumpOptions::default())
}

pub fn dump_with(file: &File, options: DumpOptions) -> String {
    let mut dumper = Dumper {
        out: String::new(),
        indent: 0,
        options,
    };
    dumper.file(file);
    dumper.out
}

struct Dumper {
    out: String,
    indent: usize,
    options: DumpOptions,
}

impl Dumper {
    // ─── Layout ────────────────────────────────────────────────────

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent += 1;
        body(self);
        self.indent -= 1;
    }

    /// Node header plus its decoration; the caller renders fields inside
    /// [`Dumper::indented`].
    fn header(&mut self, label: &str, meta: &NodeMeta) {
        if self.options.spans {
            self.line(&format!("{label} @{}", meta.span));
        } else {
            self.line(label);
        }
    }

    fn node(&mut self, label: &str, meta: &NodeMeta, fields: impl FnOnce(&mut Self)) {
        self.header(label, meta);
        self.indented(|d| {
            d.decoration(meta);
            fields(d);
        });
    }

    fn decoration(&mut self, meta: &NodeMeta) {
        if self.options.comments {
            self.comments(&meta.comments);
        }
        self.list("errors", &meta.errors, Dumper::error);
    }

    fn comments(&mut self, comments: &[String]) {
        self.list("comments", comments, |d, comment| d.line(&format!("{comment:?}")));
    }

    fn field(&mut self, name: &str, value: &str) {
        self.line(&format!("{name}: {value:?}"));
    }

    fn opt_field(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.field(name, value);
        }
    }

    fn flag(&mut self, name: &str, set: bool) {
        if set {
            self.line(&format!("{name}: true"));
        }
    }

    fn flags<I: IntoIterator<Item = &'static str>>(&mut self, names: I) {
        let names: Vec<String> = names.into_iter().map(str::to_lowercase).collect();
        if !names.is_empty() {
            self.line(&format!("flags: {}", names.join(" | ")));
        }
    }

    fn list<T>(&mut self, name: &str, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        if items.is_empty() {
            return;
        }
        self.line(&format!("{name}:"));
        self.indented(|d| {
            for item in items {
                each(d, item);
            }
        });
    }

    fn section(&mut self, name: &str, body: impl FnOnce(&mut Self)) {
        self.line(&format!("{name}:"));
        self.indented(body);
    }

    // ─── Nodes ─────────────────────────────────────────────────────

    fn file(&mut self, file: &File) {
        self.node("File", &file.meta, |d| {
            for declaration in &file.declarations {
                d.declaration(declaration);
            }
        });
    }

    fn error(&mut self, error: &ErrorNode) {
        let text = if self.options.spans {
            format!("Error @{} {:?}", error.span, error.message)
        } else {
            format!("Error {:?}", error.message)
        };
        self.line(&text);
        if self.options.comments {
            self.indented(|d| d.comments(&error.comments));
        }
    }

    fn declaration(&mut self, declaration: &Declaration) {
        let label = match declaration {
            Declaration::Interface(_) => "Interface",
            Declaration::Mixin(_) => "Mixin",
            Declaration::Dictionary(_) => "Dictionary",
            Declaration::Enum(_) => "Enum",
            Declaration::Typedef(_) => "Typedef",
            Declaration::Callback(_) => "Callback",
            Declaration::Implementation(_) => "Implementation",
            Declaration::Includes(_) => "Includes",
            Declaration::Error(_) => "ErrorDeclaration",
        };
        self.node(label, declaration.meta(), |d| {
            d.opt_field("name", declaration.name());
            d.list("annotations", declaration.annotations(), Dumper::annotation);
            match declaration {
                Declaration::Interface(interface) => {
                    d.flag("partial", interface.partial);
                    d.flag("callback", interface.callback);
                    d.opt_field("inherits", interface.inherits.as_deref());
                    d.body(
                        &interface.members,
                        &interface.custom_ops,
                        interface.iterable.as_ref(),
                    );
                }
                Declaration::Mixin(mixin) => {
                    d.flag("partial", mixin.partial);
                    d.opt_field("inherits", mixin.inherits.as_deref());
                    d.body(&mixin.members, &mixin.custom_ops, mixin.iterable.as_ref());
                }
                Declaration::Dictionary(dictionary) => {
                    d.flag("partial", dictionary.partial);
                    d.opt_field("inherits", dictionary.inherits.as_deref());
                    d.body(&dictionary.members, &[], None);
                }
                Declaration::Enum(en) => d.list("values", &en.values, Dumper::literal),
                Declaration::Typedef(typedef) => d.section("type", |d| d.ty(&typedef.ty)),
                Declaration::Callback(callback) => {
                    if let Some(return_type) = &callback.return_type {
                        d.section("return", |d| d.ty(return_type));
                    }
                    d.list("parameters", &callback.parameters, Dumper::parameter);
                }
                Declaration::Implementation(implementation) => {
                    d.field("source", &implementation.source);
                }
                Declaration::Includes(includes) => d.field("source", &includes.source),
                Declaration::Error(_) => {}
            }
        });
    }

    fn body(&mut self, members: &[Member], custom_ops: &[CustomOp], iterable: Option<&Iterable>) {
        self.list("members", members, Dumper::member);
        self.list("custom_ops", custom_ops, |d, op| {
            d.node("CustomOp", &op.meta, |d| d.field("name", &op.name));
        });
        if let Some(iterable) = iterable {
            self.node("Iterable", &iterable.meta, |d| {
                if let Some(key_type) = &iterable.key_type {
                    d.section("key", |d| d.ty(key_type));
                }
                d.section("value", |d| d.ty(&iterable.value_type));
            });
        }
    }

    fn member(&mut self, member: &Member) {
        self.node("Member", &member.meta, |d| {
            d.opt_field("name", member.name.as_deref());
            d.list("annotations", &member.annotations, Dumper::annotation);
            if let Some(specialization) = member.specialization {
                d.line(&format!("specialization: {}", specialization.keyword()));
            }
            d.flags(member.flags.iter_names().map(|(name, _)| name));
            d.section("type", |d| d.ty(&member.ty));
            d.list("parameters", &member.parameters, Dumper::parameter);
            if let Some(default) = &member.default {
                d.section("default", |d| d.literal(default));
            }
        });
    }

    fn parameter(&mut self, parameter: &Parameter) {
        self.node("Parameter", &parameter.meta, |d| {
            d.field("name", &parameter.name);
            d.list("annotations", &parameter.annotations, Dumper::annotation);
            d.flags(parameter.flags.iter_names().map(|(name, _)| name));
            d.section("type", |d| d.ty(&parameter.ty));
            if let Some(default) = &parameter.default {
                d.section("default", |d| d.literal(default));
            }
        });
    }

    fn annotation(&mut self, annotation: &Annotation) {
        ensure_sufficient_stack(|| {
            self.node("Annotation", &annotation.meta, |d| {
                d.field("name", &annotation.name);
                match &annotation.payload {
                    AnnotationPayload::None => {}
                    AnnotationPayload::Value(value) => d.field("value", value),
                    AnnotationPayload::Values(values) => {
                        d.list("values", values, |d, value| d.line(&format!("{value:?}")));
                    }
                    AnnotationPayload::Parameters(parameters) => {
                        // `Foo()` is kept apart from a bare `Foo`.
                        if parameters.is_empty() {
                            d.line("parameters: []");
                        }
                        d.list("parameters", parameters, Dumper::parameter);
                    }
                }
            });
        });
    }

    fn ty(&mut self, ty: &Type) {
        ensure_sufficient_stack(|| {
            match &ty.kind {
                TypeKind::Any => self.node("Any", &ty.meta, |_| {}),
                TypeKind::Named { name } => self.node("Named", &ty.meta, |d| d.field("name", name)),
                TypeKind::Parametrized { name, arguments } => {
                    self.node("Parametrized", &ty.meta, |d| {
                        d.field("name", name);
                        d.list("arguments", arguments, Dumper::ty);
                    });
                }
                TypeKind::Sequence { element } => {
                    self.node("Sequence", &ty.meta, |d| d.section("element", |d| d.ty(element)));
                }
                TypeKind::Record { key, value } => {
                    self.node("Record", &ty.meta, |d| {
                        d.section("key", |d| d.ty(key));
                        d.section("value", |d| d.ty(value));
                    });
                }
                TypeKind::Union { members } => {
                    self.node("Union", &ty.meta, |d| d.list("members", members, Dumper::ty));
                }
                TypeKind::Nullable { inner } => {
                    self.node("Nullable", &ty.meta, |d| d.section("inner", |d| d.ty(inner)));
                }
            }
        });
    }

    fn literal(&mut self, literal: &Literal) {
        ensure_sufficient_stack(|| {
            match &literal.kind {
                LiteralKind::Basic(text) => {
                    self.node("Literal", &literal.meta, |d| d.field("text", text));
                }
                LiteralKind::Sequence(items) => {
                    self.node("SequenceLiteral", &literal.meta, |d| {
                        d.list("items", items, Dumper::literal);
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests;
