//! Declaration Formatting
//!
//! Prints declarations one after another with a blank line between them.
//! Interface and mixin bodies are printed in source order: members,
//! custom operations and the iterable are merged by span start.

use widl_ir::{
    Callback, CustomOp, Declaration, Dictionary, Enum, File, Interface, Iterable, Member,
    MemberFlags, Mixin, Node, Typedef,
};

use crate::context::FormatContext;
use crate::inline::{format_annotations, format_literal, format_parameters, format_type};

/// Modifier keywords in grammar order.
const MODIFIERS: [(MemberFlags, &str); 5] = [
    (MemberFlags::CONST, "const"),
    (MemberFlags::STATIC, "static"),
    (MemberFlags::READONLY, "readonly"),
    (MemberFlags::REQUIRED, "required"),
    (MemberFlags::ATTRIBUTE, "attribute"),
];

/// Format a whole file.
pub fn format_file(file: &File) -> String {
    let mut formatter = FileFormatter::new();
    formatter.format_file(file);
    formatter.finish()
}

/// One entry of an interface or mixin body.
enum BodyItem<'a> {
    Member(&'a Member),
    CustomOp(&'a CustomOp),
    Iterable(&'a Iterable),
}

impl BodyItem<'_> {
    fn start(&self) -> u32 {
        match self {
            BodyItem::Member(member) => member.meta.span.start,
            BodyItem::CustomOp(op) => op.meta.span.start,
            BodyItem::Iterable(iterable) => iterable.meta.span.start,
        }
    }
}

#[derive(Default)]
pub struct FileFormatter {
    ctx: FormatContext,
}

impl FileFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text formatted so far.
    pub fn finish(self) -> String {
        self.ctx.finalize()
    }

    pub fn format_file(&mut self, file: &File) {
        let mut first = true;
        for declaration in &file.declarations {
            if matches!(declaration, Declaration::Error(_)) {
                continue;
            }
            if !first {
                self.ctx.emit_newline();
            }
            first = false;
            self.format_declaration(declaration);
        }
    }

    pub fn format_declaration(&mut self, declaration: &Declaration) {
        Self::emit_comments(&mut self.ctx, &declaration.meta().comments);
        let annotations = format_annotations(declaration.annotations());
        if !annotations.is_empty() {
            self.ctx.emit_line(&annotations);
        }

        match declaration {
            Declaration::Interface(interface) => self.interface(interface),
            Declaration::Mixin(mixin) => self.mixin(mixin),
            Declaration::Dictionary(dictionary) => self.dictionary(dictionary),
            Declaration::Enum(en) => self.enumeration(en),
            Declaration::Typedef(typedef) => self.typedef(typedef),
            Declaration::Callback(callback) => self.callback(callback),
            Declaration::Implementation(implementation) => self.ctx.emit_line(&format!(
                "{} implements {};",
                implementation.name, implementation.source
            )),
            Declaration::Includes(includes) => self
                .ctx
                .emit_line(&format!("{} includes {};", includes.name, includes.source)),
            Declaration::Error(_) => {}
        }
    }

    fn interface(&mut self, interface: &Interface) {
        if interface.partial {
            self.ctx.emit("partial ");
        }
        if interface.callback {
            self.ctx.emit("callback ");
        }
        self.ctx.emit("interface ");
        self.header(&interface.name, interface.inherits.as_deref());
        self.body(
            &interface.members,
            &interface.custom_ops,
            interface.iterable.as_ref(),
        );
    }

    fn mixin(&mut self, mixin: &Mixin) {
        if mixin.partial {
            self.ctx.emit("partial ");
        }
        self.ctx.emit("interface mixin ");
        self.header(&mixin.name, mixin.inherits.as_deref());
        self.body(&mixin.members, &mixin.custom_ops, mixin.iterable.as_ref());
    }

    fn dictionary(&mut self, dictionary: &Dictionary) {
        if dictionary.partial {
            self.ctx.emit("partial ");
        }
        self.ctx.emit("dictionary ");
        self.header(&dictionary.name, dictionary.inherits.as_deref());
        if dictionary.members.is_empty() {
            self.ctx.emit_line("{};");
            return;
        }
        self.ctx.emit_line("{");
        self.ctx.indented(|ctx| {
            for member in &dictionary.members {
                Self::member(ctx, member, true);
            }
        });
        self.ctx.emit_line("};");
    }

    /// `Name : Base ` up to the opening brace.
    fn header(&mut self, name: &str, inherits: Option<&str>) {
        self.ctx.emit(name);
        if let Some(base) = inherits {
            self.ctx.emit(" : ");
            self.ctx.emit(base);
        }
        self.ctx.emit(" ");
    }

    fn body(&mut self, members: &[Member], custom_ops: &[CustomOp], iterable: Option<&Iterable>) {
        let mut items: Vec<BodyItem<'_>> = members
            .iter()
            .map(BodyItem::Member)
            .chain(custom_ops.iter().map(BodyItem::CustomOp))
            .chain(iterable.map(BodyItem::Iterable))
            .collect();
        if items.is_empty() {
            self.ctx.emit_line("{};");
            return;
        }
        items.sort_by_key(BodyItem::start);

        self.ctx.emit_line("{");
        self.ctx.indented(|ctx| {
            for item in items {
                match item {
                    BodyItem::Member(member) => Self::member(ctx, member, false),
                    BodyItem::CustomOp(op) => {
                        Self::emit_comments(ctx, &op.meta.comments);
                        ctx.emit_line(&format!("{};", op.name));
                    }
                    BodyItem::Iterable(iterable) => {
                        Self::emit_comments(ctx, &iterable.meta.comments);
                        let value = format_type(&iterable.value_type);
                        let types = match &iterable.key_type {
                            Some(key) => format!("{}, {value}", format_type(key)),
                            None => value,
                        };
                        ctx.emit_line(&format!("iterable<{types}>;"));
                    }
                }
            }
        });
        self.ctx.emit_line("};");
    }

    fn emit_comments(ctx: &mut FormatContext, comments: &[String]) {
        for comment in comments {
            ctx.emit_line(comment);
        }
    }

    /// One member line. Dictionary members leave out `attribute`.
    fn member(ctx: &mut FormatContext, member: &Member, dictionary: bool) {
        Self::emit_comments(ctx, &member.meta.comments);

        let mut words: Vec<String> = Vec::new();
        let annotations = format_annotations(&member.annotations);
        if !annotations.is_empty() {
            words.push(annotations);
        }
        if let Some(specialization) = member.specialization {
            words.push(specialization.keyword().to_string());
        }
        for (flag, keyword) in MODIFIERS {
            if dictionary && flag == MemberFlags::ATTRIBUTE {
                continue;
            }
            if member.flags.contains(flag) {
                words.push(keyword.to_string());
            }
        }
        words.push(format_type(&member.ty));

        let mut line = words.join(" ");
        if let Some(name) = &member.name {
            line.push(' ');
            line.push_str(name);
        }
        if member.is_operation() {
            if member.name.is_none() {
                line.push(' ');
            }
            line.push_str(&format_parameters(&member.parameters));
        }
        if let Some(default) = &member.default {
            line.push_str(" = ");
            line.push_str(&format_literal(default));
        }
        line.push(';');
        ctx.emit_line(&line);
    }

    fn enumeration(&mut self, en: &Enum) {
        self.ctx.emit(&format!("enum {} ", en.name));
        if en.values.is_empty() {
            self.ctx.emit_line("{};");
            return;
        }
        self.ctx.emit_line("{");
        self.ctx.indented(|ctx| {
            let last = en.values.len() - 1;
            for (i, value) in en.values.iter().enumerate() {
                let separator = if i == last { "" } else { "," };
                ctx.emit_line(&format!("{}{separator}", format_literal(value)));
            }
        });
        self.ctx.emit_line("};");
    }

    fn typedef(&mut self, typedef: &Typedef) {
        self.ctx.emit_line(&format!(
            "typedef {} {};",
            format_type(&typedef.ty),
            typedef.name
        ));
    }

    fn callback(&mut self, callback: &Callback) {
        match &callback.return_type {
            Some(return_type) => self.ctx.emit_line(&format!(
                "callback {} = {} {};",
                callback.name,
                format_type(return_type),
                format_parameters(&callback.parameters)
            )),
            None => self.ctx.emit_line(&format!("callback {};", callback.name)),
        }
    }
}

#[cfg(test)]
mod tests;
