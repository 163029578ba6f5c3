//! Reflection tree model consumed by the serializers.
//!
//! The shapes follow typedoc's `--json` output. The tree is produced by an external
//! collaborator (see [`crate::source`]) and is only ever read here.

mod kind;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use kind::{DeclarationKind, RawKind};
pub use types::{
    ArrayType, CompositeType, ConditionalType, IndexedAccessType, LiteralType, LiteralValue,
    NamedType, PredicateType, ReferenceType, ReflectionType, TupleType, TypeDescriptor,
    TypeOperatorType,
};

/// The root of a reflection tree. Typedoc emits the project itself as a declaration.
pub type ProjectReflection = DeclarationNode;

/// One symbol in the reflection tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RawKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DeclarationNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<SignatureDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_signature: Option<OneOrMany<SignatureDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_signature: Option<OneOrMany<SignatureDescriptor>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<TypeDescriptor>,
    /// typedoc <= 0.22
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameter: Option<Vec<TypeParameter>>,
    /// typedoc >= 0.23
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Fields not modelled here (`flags`, `sources`, ...), written back verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl DeclarationNode {
    /// Creates a bare node of the given kind, with no comment, children or type.
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: Some(RawKind::Bits(kind.bits())),
            kind_string: Some(kind.display_name().to_string()),
            comment: None,
            children: None,
            signatures: None,
            get_signature: None,
            set_signature: None,
            type_: None,
            type_parameter: None,
            type_parameters: None,
            default_value: None,
            extra: IndexMap::new(),
        }
    }

    /// Resolves the declaration kind, preferring `kindString` over the numeric `kind`.
    pub fn declaration_kind(&self) -> DeclarationKind {
        self.kind_string
            .as_deref()
            .and_then(DeclarationKind::from_name)
            .or_else(|| self.kind.as_ref().and_then(RawKind::resolve))
            .unwrap_or(DeclarationKind::Other)
    }

    /// The human-readable kind written to the `kind` key of a serialized block.
    pub fn kind_label(&self) -> String {
        match &self.kind_string {
            Some(label) => label.clone(),
            None => match (self.declaration_kind(), &self.kind) {
                (DeclarationKind::Other, Some(RawKind::Name(name))) => name.clone(),
                (kind, _) => kind.display_name().to_string(),
            },
        }
    }

    /// Generic parameters under whichever key the typedoc release used.
    pub fn generics(&self) -> Option<&[TypeParameter]> {
        self.type_parameter
            .as_deref()
            .or(self.type_parameters.as_deref())
    }

    /// Ordered children, empty when the node has none.
    pub fn children(&self) -> &[DeclarationNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// A call, construct, get or set signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RawKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDescriptor>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SignatureDescriptor {
    pub fn new(name: impl Into<String>, type_: Option<TypeDescriptor>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: None,
            kind_string: None,
            comment: None,
            parameters: None,
            type_,
            extra: IndexMap::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterDescriptor>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// A single signature parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_: Option<TypeDescriptor>) -> Self {
        Self {
            id: None,
            name: name.into(),
            type_,
            default_value: None,
            comment: None,
            extra: IndexMap::new(),
        }
    }
}

/// A generic parameter of a type alias, class or signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: IndexMap::new(),
        }
    }
}

/// A doc comment. Typed fields cover typedoc's classic comment shape; anything else
/// (e.g. `summary` / `blockTags` from newer typedoc releases) is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CommentTag>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Comment {
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            short_text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// A `@tag` inside a doc comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentTag {
    pub tag: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// Typedoc has emitted accessor signatures both as a single object and as an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }
}
