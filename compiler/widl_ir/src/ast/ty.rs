//! Type expressions.

use std::mem;

use super::{impl_node, NodeMeta};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Type {
    pub meta: NodeMeta,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ast::serialize_deep"))]
    pub kind: TypeKind,
}

impl_node!(Type);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeKind {
    Any,
    /// A plain or multi-word primitive name such as `unsigned long`.
    Named { name: String },
    /// `Promise<void>`, `FrozenArray<DOMString>`.
    Parametrized { name: String, arguments: Vec<Type> },
    Sequence { element: Box<Type> },
    Record { key: Box<Type>, value: Box<Type> },
    /// `(A or B or C)`; at least one member.
    Union { members: Vec<Type> },
    /// Never wraps another `Nullable`.
    Nullable { inner: Box<Type> },
}

/// A missing type reads as an empty name.
impl Default for TypeKind {
    fn default() -> Self {
        TypeKind::Named {
            name: String::new(),
        }
    }
}

impl Type {
    pub fn new(meta: NodeMeta, kind: TypeKind) -> Self {
        Type { meta, kind }
    }

    pub fn named(meta: NodeMeta, name: impl Into<String>) -> Self {
        Type::new(meta, TypeKind::Named { name: name.into() })
    }

    /// Wrap in `Nullable` under `meta`. An already nullable type is returned
    /// unchanged, so nesting cannot be built through this constructor.
    #[must_use]
    pub fn into_nullable(self, meta: NodeMeta) -> Self {
        if self.is_nullable() {
            return self;
        }
        Type::new(
            meta,
            TypeKind::Nullable {
                inner: Box::new(self),
            },
        )
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        matches!(self.kind, TypeKind::Nullable { .. })
    }

    /// Name of a `Named` or `Parametrized` type.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Named { name } | TypeKind::Parametrized { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Direct child types in source order.
    pub fn children(&self) -> Vec<&Type> {
        match &self.kind {
            TypeKind::Any | TypeKind::Named { .. } => Vec::new(),
            TypeKind::Parametrized { arguments, .. } => arguments.iter().collect(),
            TypeKind::Sequence { element } => vec![&**element],
            TypeKind::Record { key, value } => vec![&**key, &**value],
            TypeKind::Union { members } => members.iter().collect(),
            TypeKind::Nullable { inner } => vec![&**inner],
        }
    }

    /// Move the direct children out, leaving empty placeholders behind.
    fn take_children(&mut self) -> Vec<Type> {
        match &mut self.kind {
            TypeKind::Any | TypeKind::Named { .. } => Vec::new(),
            TypeKind::Parametrized { arguments, .. } => mem::take(arguments),
            TypeKind::Sequence { element } => vec![mem::take(&mut **element)],
            TypeKind::Record { key, value } => {
                vec![mem::take(&mut **key), mem::take(&mut **value)]
            }
            TypeKind::Union { members } => mem::take(members),
            TypeKind::Nullable { inner } => vec![mem::take(&mut **inner)],
        }
    }
}

/// Drops nested types from a worklist so that arbitrarily deep nesting
/// does not recurse.
impl Drop for Type {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut ty) = pending.pop() {
            pending.append(&mut ty.take_children());
        }
    }
}
