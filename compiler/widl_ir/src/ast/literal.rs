use std::mem;

use super::{impl_node, NodeMeta};

/// An enum value or a default value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Literal {
    pub meta: NodeMeta,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ast::serialize_deep"))]
    pub kind: LiteralKind,
}

impl_node!(Literal);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralKind {
    /// Token text exactly as written; string literals keep their quotes.
    Basic(String),
    /// `[a, b]`
    Sequence(Vec<Literal>),
}

impl Default for LiteralKind {
    fn default() -> Self {
        LiteralKind::Basic(String::new())
    }
}

impl Literal {
    pub fn new(meta: NodeMeta, kind: LiteralKind) -> Self {
        Literal { meta, kind }
    }

    pub fn basic(meta: NodeMeta, text: impl Into<String>) -> Self {
        Literal {
            meta,
            kind: LiteralKind::Basic(text.into()),
        }
    }

    /// Raw text of a basic literal.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Basic(text) => Some(text),
            LiteralKind::Sequence(_) => None,
        }
    }

    /// Contents of a quoted string literal, without the quotes.
    ///
    /// Escapes are left as written. Returns `None` for anything that is not
    /// a string literal.
    pub fn string_value(&self) -> Option<&str> {
        self.text()?
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
    }
}

/// Nested sequence literals are dropped from a worklist.
impl Drop for Literal {
    fn drop(&mut self) {
        let LiteralKind::Sequence(items) = &mut self.kind else {
            return;
        };
        let mut pending = mem::take(items);
        while let Some(mut literal) = pending.pop() {
            if let LiteralKind::Sequence(items) = &mut literal.kind {
                pending.append(items);
            }
        }
    }
}
