//! Read-only tree traversal.
//!
//! # Design
//!
//! The `Visitor` trait has one `visit_*` method per node type. Defaults call
//! the matching `walk_*` function, which reports the node's [`NodeMeta`]
//! through [`Visitor::visit_meta`] and then visits children. Override a
//! `visit_*` method to act on a node; call `walk_*` from it to keep
//! descending.
//!
//! # Example
//!
//! ```
//! use widl_ir::ast::{File, Member};
//! use widl_ir::visitor::{walk_member, Visitor};
//!
//! #[derive(Default)]
//! struct CountMembers {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountMembers {
//!     fn visit_member(&mut self, member: &'ast Member) {
//!         self.count += 1;
//!         walk_member(self, member);
//!     }
//! }
//!
//! let mut counter = CountMembers::default();
//! counter.visit_file(&File::default());
//! assert_eq!(counter.count, 0);
//! ```

use widl_stack::ensure_sufficient_stack;

use crate::ast::{
    Annotation, AnnotationPayload, CustomOp, Declaration, ErrorNode, File, Iterable, Literal,
    LiteralKind, Member, Node, NodeMeta, Parameter, Type,
};

// Visitor Trait

pub trait Visitor<'ast> {
    fn visit_file(&mut self, file: &'ast File) {
        walk_file(self, file);
    }

    fn visit_declaration(&mut self, declaration: &'ast Declaration) {
        walk_declaration(self, declaration);
    }

    fn visit_member(&mut self, member: &'ast Member) {
        walk_member(self, member);
    }

    fn visit_parameter(&mut self, parameter: &'ast Parameter) {
        walk_parameter(self, parameter);
    }

    fn visit_type(&mut self, ty: &'ast Type) {
        walk_type(self, ty);
    }

    fn visit_annotation(&mut self, annotation: &'ast Annotation) {
        walk_annotation(self, annotation);
    }

    fn visit_literal(&mut self, literal: &'ast Literal) {
        walk_literal(self, literal);
    }

    fn visit_custom_op(&mut self, custom_op: &'ast CustomOp) {
        self.visit_meta(&custom_op.meta);
    }

    fn visit_iterable(&mut self, iterable: &'ast Iterable) {
        walk_iterable(self, iterable);
    }

    /// Called once per node, before its children.
    fn visit_meta(&mut self, meta: &'ast NodeMeta) {
        let _ = meta;
    }
}

// Walk Functions
//
// Children are visited in source order: annotations first, then the node's
// own parts left to right.

pub fn walk_file<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, file: &'ast File) {
    visitor.visit_meta(&file.meta);
    for declaration in &file.declarations {
        visitor.visit_declaration(declaration);
    }
}

pub fn walk_declaration<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    declaration: &'ast Declaration,
) {
    visitor.visit_meta(declaration.meta());
    for annotation in declaration.annotations() {
        visitor.visit_annotation(annotation);
    }
    match declaration {
        Declaration::Interface(interface) => {
            walk_body(
                visitor,
                &interface.members,
                &interface.custom_ops,
                interface.iterable.as_ref(),
            );
        }
        Declaration::Mixin(mixin) => {
            walk_body(
                visitor,
                &mixin.members,
                &mixin.custom_ops,
                mixin.iterable.as_ref(),
            );
        }
        Declaration::Dictionary(dictionary) => walk_body(visitor, &dictionary.members, &[], None),
        Declaration::Enum(en) => {
            for value in &en.values {
                visitor.visit_literal(value);
            }
        }
        Declaration::Typedef(typedef) => visitor.visit_type(&typedef.ty),
        Declaration::Callback(callback) => {
            if let Some(return_type) = &callback.return_type {
                visitor.visit_type(return_type);
            }
            for parameter in &callback.parameters {
                visitor.visit_parameter(parameter);
            }
        }
        Declaration::Implementation(_) | Declaration::Includes(_) | Declaration::Error(_) => {}
    }
}

fn walk_body<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    members: &'ast [Member],
    custom_ops: &'ast [CustomOp],
    iterable: Option<&'ast Iterable>,
) {
    for member in members {
        visitor.visit_member(member);
    }
    for custom_op in custom_ops {
        visitor.visit_custom_op(custom_op);
    }
    if let Some(iterable) = iterable {
        visitor.visit_iterable(iterable);
    }
}

pub fn walk_member<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, member: &'ast Member) {
    visitor.visit_meta(&member.meta);
    for annotation in &member.annotations {
        visitor.visit_annotation(annotation);
    }
    visitor.visit_type(&member.ty);
    for parameter in &member.parameters {
        visitor.visit_parameter(parameter);
    }
    if let Some(default) = &member.default {
        visitor.visit_literal(default);
    }
}

pub fn walk_parameter<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    parameter: &'ast Parameter,
) {
    visitor.visit_meta(&parameter.meta);
    for annotation in &parameter.annotations {
        visitor.visit_annotation(annotation);
    }
    visitor.visit_type(&parameter.ty);
    if let Some(default) = &parameter.default {
        visitor.visit_literal(default);
    }
}

pub fn walk_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast Type) {
    ensure_sufficient_stack(|| {
        visitor.visit_meta(&ty.meta);
        for child in ty.children() {
            visitor.visit_type(child);
        }
    });
}

pub fn walk_annotation<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    annotation: &'ast Annotation,
) {
    ensure_sufficient_stack(|| {
        visitor.visit_meta(&annotation.meta);
        if let AnnotationPayload::Parameters(parameters) = &annotation.payload {
            for parameter in parameters {
                visitor.visit_parameter(parameter);
            }
        }
    });
}

pub fn walk_literal<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, literal: &'ast Literal) {
    ensure_sufficient_stack(|| {
        visitor.visit_meta(&literal.meta);
        if let LiteralKind::Sequence(items) = &literal.kind {
            for item in items {
                visitor.visit_literal(item);
            }
        }
    });
}

pub fn walk_iterable<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, iterable: &'ast Iterable) {
    visitor.visit_meta(&iterable.meta);
    if let Some(key_type) = &iterable.key_type {
        visitor.visit_type(key_type);
    }
    visitor.visit_type(&iterable.value_type);
}

/// Gathers every [`ErrorNode`] in traversal order.
#[derive(Default)]
pub struct ErrorCollector<'ast> {
    pub errors: Vec<&'ast ErrorNode>,
}

impl<'ast> Visitor<'ast> for ErrorCollector<'ast> {
    fn visit_meta(&mut self, meta: &'ast NodeMeta) {
        self.errors.extend(&meta.errors);
    }
}
