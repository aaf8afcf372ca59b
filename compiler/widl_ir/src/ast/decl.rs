//! Top-level declarations.

use super::{
    impl_node, Annotation, CustomOp, Iterable, Literal, Member, Node, NodeMeta, Parameter, Type,
};

/// A top-level construct.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Declaration {
    Interface(Interface),
    Mixin(Mixin),
    Dictionary(Dictionary),
    Enum(Enum),
    Typedef(Typedef),
    Callback(Callback),
    Implementation(Implementation),
    Includes(Includes),
    /// Placeholder for a declaration whose keyword was not recognised.
    Error(ErrorDeclaration),
}

impl Declaration {
    /// Declared name; `None` for placeholders.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Interface(d) => Some(&d.name),
            Declaration::Mixin(d) => Some(&d.name),
            Declaration::Dictionary(d) => Some(&d.name),
            Declaration::Enum(d) => Some(&d.name),
            Declaration::Typedef(d) => Some(&d.name),
            Declaration::Callback(d) => Some(&d.name),
            Declaration::Implementation(d) => Some(&d.name),
            Declaration::Includes(d) => Some(&d.name),
            Declaration::Error(_) => None,
        }
    }

    /// Short lowercase label for the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Interface(_) => "interface",
            Declaration::Mixin(_) => "mixin",
            Declaration::Dictionary(_) => "dictionary",
            Declaration::Enum(_) => "enum",
            Declaration::Typedef(_) => "typedef",
            Declaration::Callback(_) => "callback",
            Declaration::Implementation(_) => "implements",
            Declaration::Includes(_) => "includes",
            Declaration::Error(_) => "error",
        }
    }

    /// Annotations written before the declaration keyword.
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Declaration::Interface(d) => &d.annotations,
            Declaration::Mixin(d) => &d.annotations,
            Declaration::Dictionary(d) => &d.annotations,
            Declaration::Enum(d) => &d.annotations,
            Declaration::Typedef(d) => &d.annotations,
            Declaration::Callback(d) => &d.annotations,
            Declaration::Error(d) => &d.annotations,
            Declaration::Implementation(_) | Declaration::Includes(_) => &[],
        }
    }
}

impl Node for Declaration {
    fn meta(&self) -> &NodeMeta {
        match self {
            Declaration::Interface(d) => d.meta(),
            Declaration::Mixin(d) => d.meta(),
            Declaration::Dictionary(d) => d.meta(),
            Declaration::Enum(d) => d.meta(),
            Declaration::Typedef(d) => d.meta(),
            Declaration::Callback(d) => d.meta(),
            Declaration::Implementation(d) => d.meta(),
            Declaration::Includes(d) => d.meta(),
            Declaration::Error(d) => d.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        match self {
            Declaration::Interface(d) => d.meta_mut(),
            Declaration::Mixin(d) => d.meta_mut(),
            Declaration::Dictionary(d) => d.meta_mut(),
            Declaration::Enum(d) => d.meta_mut(),
            Declaration::Typedef(d) => d.meta_mut(),
            Declaration::Callback(d) => d.meta_mut(),
            Declaration::Implementation(d) => d.meta_mut(),
            Declaration::Includes(d) => d.meta_mut(),
            Declaration::Error(d) => d.meta_mut(),
        }
    }
}

/// ```webidl
/// [Exposed=Window] partial interface Foo : Bar { ... };
/// callback interface Listener { ... };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interface {
    pub meta: NodeMeta,
    pub name: String,
    pub partial: bool,
    /// Declared with `callback interface`.
    pub callback: bool,
    /// Parent interface name after `:`.
    pub inherits: Option<String>,
    pub annotations: Vec<Annotation>,
    pub members: Vec<Member>,
    /// `serializer;`, `jsonifier;`, `stringifier;`
    pub custom_ops: Vec<CustomOp>,
    pub iterable: Option<Iterable>,
}

/// ```webidl
/// interface mixin Body { ... };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mixin {
    pub meta: NodeMeta,
    pub name: String,
    pub partial: bool,
    pub inherits: Option<String>,
    pub annotations: Vec<Annotation>,
    pub members: Vec<Member>,
    pub custom_ops: Vec<CustomOp>,
    /// Single-element iterables only.
    pub iterable: Option<Iterable>,
}

/// ```webidl
/// dictionary Options : BaseOptions { required long size; DOMString mode = "fast"; };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dictionary {
    pub meta: NodeMeta,
    pub name: String,
    pub partial: bool,
    pub inherits: Option<String>,
    pub annotations: Vec<Annotation>,
    pub members: Vec<Member>,
}

/// ```webidl
/// enum Color { "red", "green" };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enum {
    pub meta: NodeMeta,
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub values: Vec<Literal>,
}

/// ```webidl
/// typedef (long or DOMString)? Result;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Typedef {
    pub meta: NodeMeta,
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
}

/// ```webidl
/// callback Handler = void (Event event);
/// callback Bare;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Callback {
    pub meta: NodeMeta,
    pub name: String,
    pub annotations: Vec<Annotation>,
    /// Absent for the bare `callback Name;` form.
    pub return_type: Option<Type>,
    pub parameters: Vec<Parameter>,
}

/// `Window implements Globals;`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Implementation {
    pub meta: NodeMeta,
    pub name: String,
    /// The implemented interface's name.
    pub source: String,
}

/// `Document includes DocumentOrShadowRoot;`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Includes {
    pub meta: NodeMeta,
    pub name: String,
    /// The included mixin's name.
    pub source: String,
}

/// Recovery placeholder. Its meta carries the error; the body was skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorDeclaration {
    pub meta: NodeMeta,
    pub annotations: Vec<Annotation>,
}

impl_node!(
    Interface,
    Mixin,
    Dictionary,
    Enum,
    Typedef,
    Callback,
    Implementation,
    Includes,
    ErrorDeclaration,
);
