//! Syntax tree nodes.
//!
//! Closed sum types ([`Declaration`], [`TypeKind`], [`LiteralKind`],
//! [`AnnotationPayload`]) are plain enums so consumers match exhaustively.

mod annotation;
mod decl;
mod literal;
mod member;
mod ty;

pub use annotation::{Annotation, AnnotationPayload};
pub use decl::{
    Callback, Declaration, Dictionary, Enum, ErrorDeclaration, Implementation, Includes,
    Interface, Mixin, Typedef,
};
pub use literal::{Literal, LiteralKind};
pub use member::{CustomOp, Iterable, Member, MemberFlags, Parameter, ParameterFlags, Specialization};
pub use ty::{Type, TypeKind};

use crate::visitor::{ErrorCollector, Visitor};
use crate::Span;

/// Decoration shared by every node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeMeta {
    pub span: Span,
    /// Raw text of the comments directly preceding the node, in source order.
    pub comments: Vec<String>,
    /// Syntax errors found while this node was the innermost open node.
    pub errors: Vec<ErrorNode>,
}

impl NodeMeta {
    pub fn new(span: Span) -> Self {
        NodeMeta {
            span,
            comments: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// A syntax error embedded in the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorNode {
    pub span: Span,
    pub comments: Vec<String>,
    pub message: String,
}

/// Access to the decoration of any node.
pub trait Node {
    fn meta(&self) -> &NodeMeta;

    fn meta_mut(&mut self) -> &mut NodeMeta;

    #[inline]
    fn span(&self) -> Span {
        self.meta().span
    }
}

macro_rules! impl_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ast::Node for $ty {
                #[inline]
                fn meta(&self) -> &$crate::ast::NodeMeta {
                    &self.meta
                }

                #[inline]
                fn meta_mut(&mut self) -> &mut $crate::ast::NodeMeta {
                    &mut self.meta
                }
            }
        )*
    };
}

pub(crate) use impl_node;

/// Serializes a recursive field on a grown stack.
#[cfg(feature = "serde")]
pub(crate) fn serialize_deep<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize,
    S: serde::Serializer,
{
    widl_stack::ensure_sufficient_stack(|| value.serialize(serializer))
}

/// Root of a parse: the declarations of one source text.
///
/// Lexical errors and unrecoverable top-level errors are recorded on the
/// file's own [`NodeMeta`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct File {
    pub meta: NodeMeta,
    pub declarations: Vec<Declaration>,
}

impl_node!(File);

impl File {
    /// Every embedded error, in tree order (parents before children).
    pub fn errors(&self) -> Vec<&ErrorNode> {
        let mut collector = ErrorCollector::default();
        collector.visit_file(self);
        collector.errors
    }

    /// True if any node in the tree carries an error.
    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

#[cfg(test)]
mod tests;
