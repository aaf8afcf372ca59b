//! Syntax tree for the supported WebIDL subset.
//!
//! Every node carries a [`NodeMeta`]: an inclusive [`Span`], the comments that
//! immediately preceded it, and the [`ErrorNode`]s recorded while it was being
//! parsed. Syntax errors are part of the tree, never a side channel.
//!
//! The tree is a strict ownership forest. Cross-declaration links
//! (inheritance, `implements`, `includes`) are plain names resolved by later
//! phases.

pub mod ast;
pub mod dump;
mod span;
pub mod visitor;

pub use ast::{
    Annotation, AnnotationPayload, Callback, CustomOp, Declaration, Dictionary, Enum,
    ErrorDeclaration, ErrorNode, File, Implementation, Includes, Interface, Iterable, Literal,
    LiteralKind, Member, MemberFlags, Mixin, Node, NodeMeta, Parameter, ParameterFlags,
    Specialization, Type, TypeKind, Typedef,
};
pub use span::Span;
pub use visitor::Visitor;
