//! Output shapes of docs.json.
//!
//! Keys are snake_case and optional keys are omitted rather than written as `null`.

use serde::Serialize;

use crate::model::{Comment, TypeDescriptor};
use crate::render::{render_optional, render_type};

/// One serialized declaration. Always carries `name` and `kind`; the kind-specific keys
/// come from the [`Fragment`] merged into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializedBlock {
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(flatten)]
    pub fragment: Option<Fragment>,
}

impl SerializedBlock {
    /// Ordered child blocks, empty unless this is a container with members.
    pub fn children(&self) -> &[SerializedBlock] {
        match &self.fragment {
            Some(Fragment::Container(container)) => &container.children,
            _ => &[],
        }
    }
}

/// Kind-specific keys produced by a serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
    Container(ContainerFragment),
    Signatures(SignaturesFragment),
    Typed(TypedFragment),
    Enum(EnumFragment),
    TypeAlias(TypeAliasFragment),
    Accessor(AccessorFragment),
}

/// `children` of a class, interface or namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerFragment {
    pub children: Vec<SerializedBlock>,
}

/// `signatures` of a constructor, method or function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignaturesFragment {
    pub signatures: Vec<SignatureBlock>,
}

/// `type` (and `default_value`) of a variable or property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedFragment {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<TypeBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// `members` of an enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumFragment {
    pub members: Vec<EnumMemberBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMemberBlock {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// `type_params`, `type` and `as_string` of a type alias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAliasFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_params: Option<Vec<TypeParamBlock>>,
    #[serde(rename = "type")]
    pub type_: TypeBlock,
    pub as_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeParamBlock {
    pub name: String,
}

/// `getters` / `setters` of an accessor, each present only when the signature exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessorFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub getters: Option<Vec<SignatureBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setters: Option<Vec<SignatureBlock>>,
}

/// A serialized call signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureBlock {
    #[serde(rename = "type")]
    pub type_: TypeBlock,
    pub as_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParameterBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterBlock {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TypeBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// `{ type, value }` pair: the descriptor (or just its tag) next to its rendered text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBlock {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub summary: Option<TypeSummary>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeSummary {
    Tag(String),
    Descriptor(TypeDescriptor),
}

impl TypeBlock {
    /// Embeds the full descriptor. A missing descriptor renders as `"unknown"`.
    pub fn describe(descriptor: Option<&TypeDescriptor>) -> Self {
        Self {
            summary: descriptor.cloned().map(TypeSummary::Descriptor),
            value: render_optional(descriptor),
        }
    }

    /// Embeds only the descriptor's tag.
    pub fn tagged(descriptor: &TypeDescriptor) -> Self {
        Self {
            summary: descriptor.tag().map(|tag| TypeSummary::Tag(tag.to_string())),
            value: render_type(descriptor),
        }
    }
}
