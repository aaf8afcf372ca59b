//! Members, parameters, and the other pieces that live inside a body.

use bitflags::bitflags;

use super::{impl_node, Annotation, Literal, NodeMeta, Type};

bitflags! {
    /// Qualifiers written before a member's type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct MemberFlags: u8 {
        const CONST = 1 << 0;
        const STATIC = 1 << 1;
        const READONLY = 1 << 2;
        const REQUIRED = 1 << 3;
        /// Set for `attribute` members and for every dictionary member.
        const ATTRIBUTE = 1 << 4;
    }
}

impl Default for MemberFlags {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct ParameterFlags: u8 {
        const OPTIONAL = 1 << 0;
        /// Declared with `...` after the type.
        const VARIADIC = 1 << 1;
    }
}

impl Default for ParameterFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Special operation keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Specialization {
    Getter,
    Setter,
    Deleter,
    Stringifier,
}

impl Specialization {
    pub const ALL: [Specialization; 4] = [
        Specialization::Getter,
        Specialization::Setter,
        Specialization::Deleter,
        Specialization::Stringifier,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Specialization::Getter => "getter",
            Specialization::Setter => "setter",
            Specialization::Deleter => "deleter",
            Specialization::Stringifier => "stringifier",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.keyword() == word)
    }
}

/// An interface, mixin, or dictionary member.
///
/// Attributes, constants, and dictionary fields have no parameters; an
/// operation may have zero or more. `name` is `None` for unnamed special
/// operations such as `getter DOMString (unsigned long index);`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Member {
    pub meta: NodeMeta,
    pub name: Option<String>,
    pub ty: Type,
    pub flags: MemberFlags,
    pub specialization: Option<Specialization>,
    pub parameters: Vec<Parameter>,
    /// Constant value or dictionary default.
    pub default: Option<Literal>,
    pub annotations: Vec<Annotation>,
}

impl Member {
    /// Operations are the members that take a parameter list.
    #[inline]
    pub fn is_operation(&self) -> bool {
        !self.flags.intersects(MemberFlags::ATTRIBUTE.union(MemberFlags::CONST))
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        self.flags.contains(MemberFlags::CONST)
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.flags.contains(MemberFlags::STATIC)
    }

    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.flags.contains(MemberFlags::READONLY)
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.flags.contains(MemberFlags::REQUIRED)
    }

    #[inline]
    pub fn is_attribute(&self) -> bool {
        self.flags.contains(MemberFlags::ATTRIBUTE)
    }
}

/// `[Clamp] optional long size = 0`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    pub meta: NodeMeta,
    pub ty: Type,
    pub name: String,
    pub flags: ParameterFlags,
    pub default: Option<Literal>,
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    #[inline]
    pub fn is_optional(&self) -> bool {
        self.flags.contains(ParameterFlags::OPTIONAL)
    }

    #[inline]
    pub fn is_variadic(&self) -> bool {
        self.flags.contains(ParameterFlags::VARIADIC)
    }
}

/// A bare operation keyword: `serializer;`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustomOp {
    pub meta: NodeMeta,
    pub name: String,
}

/// `iterable<V>` or `iterable<K, V>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Iterable {
    pub meta: NodeMeta,
    pub key_type: Option<Type>,
    pub value_type: Type,
}

impl_node!(Member, Parameter, CustomOp, Iterable);
