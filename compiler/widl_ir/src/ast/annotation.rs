use std::mem;

use super::{impl_node, NodeMeta, Parameter};

/// One entry of a bracketed annotation group, e.g. `Exposed=Window`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    pub meta: NodeMeta,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::ast::serialize_deep"))]
    pub payload: AnnotationPayload,
}

impl_node!(Annotation);

/// The optional suffix of an annotation. The shapes are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AnnotationPayload {
    /// `[Replaceable]`
    #[default]
    None,
    /// `[Exposed=Window]`
    Value(String),
    /// `[Exposed=(Window,Worker)]`
    Values(Vec<String>),
    /// `[Constructor(DOMString url)]`
    Parameters(Vec<Parameter>),
}

impl Annotation {
    pub fn value(&self) -> Option<&str> {
        match &self.payload {
            AnnotationPayload::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn values(&self) -> &[String] {
        match &self.payload {
            AnnotationPayload::Values(values) => values,
            _ => &[],
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        match &self.payload {
            AnnotationPayload::Parameters(parameters) => parameters,
            _ => &[],
        }
    }
}

/// `[A([A(...) long x]) long y]` nests annotations through parameters;
/// the nested annotations are dropped from a worklist.
impl Drop for Annotation {
    fn drop(&mut self) {
        let mut pending = take_nested(&mut self.payload);
        while let Some(mut annotation) = pending.pop() {
            pending.append(&mut take_nested(&mut annotation.payload));
        }
    }
}

fn take_nested(payload: &mut AnnotationPayload) -> Vec<Annotation> {
    match payload {
        AnnotationPayload::Parameters(parameters) => parameters
            .iter_mut()
            .flat_map(|parameter| mem::take(&mut parameter.annotations))
            .collect(),
        _ => Vec::new(),
    }
}
