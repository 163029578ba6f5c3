//! Structured type descriptors as produced by typedoc's JSON output.
//!
//! [`TypeDescriptor`] is a closed sum type over the fourteen known variants plus an
//! [`TypeDescriptor::Unrecognized`] escape hatch that keeps the raw JSON of anything the
//! classifier does not know, so it can still be written back out unchanged.
//!
//! Known payloads keep typedoc fields they do not model (`target`, `refersToTypeParameter`)
//! in a flattened `extra` map, so a descriptor serializes back to its input.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::classify::{classify, TypeKind};
use crate::model::DeclarationNode;

/// A typedoc type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Array(ArrayType),
    Conditional(ConditionalType),
    IndexedAccess(IndexedAccessType),
    Inferred(NamedType),
    Intersection(CompositeType),
    Intrinsic(NamedType),
    Predicate(PredicateType),
    Reference(ReferenceType),
    Reflection(ReflectionType),
    Literal(LiteralType),
    Tuple(TupleType),
    TypeOperator(TypeOperatorType),
    Union(CompositeType),
    Unknown(NamedType),
    /// Any descriptor whose tag is not one of the known kinds, or whose payload does not
    /// have the shape its tag promises.
    Unrecognized(Value),
}

/// `elementType[]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayType {
    pub element_type: Box<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// `check extends extends ? true : false`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalType {
    pub check_type: Box<TypeDescriptor>,
    pub extends_type: Box<TypeDescriptor>,
    pub true_type: Box<TypeDescriptor>,
    pub false_type: Box<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// `object[index]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedAccessType {
    pub object_type: Box<TypeDescriptor>,
    pub index_type: Box<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Payload shared by inferred, intrinsic and unknown-tagged descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Payload shared by union and intersection descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeType {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// `asserts name is target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredicateType {
    pub name: String,
    #[serde(default)]
    pub asserts: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<Box<TypeDescriptor>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A named reference with optional generic arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// An inline object or function type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<Box<DeclarationNode>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A literal type such as `'hello'`, `42`, `true` or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralType {
    #[serde(default)]
    pub value: LiteralValue,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Values a literal type may carry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    BigInt { value: String, negative: bool },
}

/// `[A, B, C]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<TypeDescriptor>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// `keyof T`, `readonly T[]`, `unique symbol`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOperatorType {
    pub operator: String,
    pub target: Box<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TypeDescriptor {
    /// The classified kind, `None` for [`TypeDescriptor::Unrecognized`].
    pub fn kind(&self) -> Option<TypeKind> {
        Some(match self {
            Self::Array(_) => TypeKind::Array,
            Self::Conditional(_) => TypeKind::Conditional,
            Self::IndexedAccess(_) => TypeKind::IndexedAccess,
            Self::Inferred(_) => TypeKind::Inferred,
            Self::Intersection(_) => TypeKind::Intersection,
            Self::Intrinsic(_) => TypeKind::Intrinsic,
            Self::Predicate(_) => TypeKind::Predicate,
            Self::Reference(_) => TypeKind::Reference,
            Self::Reflection(_) => TypeKind::Reflection,
            Self::Literal(_) => TypeKind::Literal,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::TypeOperator(_) => TypeKind::TypeOperator,
            Self::Union(_) => TypeKind::Union,
            Self::Unknown(_) => TypeKind::Unknown,
            Self::Unrecognized(_) => return None,
        })
    }

    /// The `type` discriminant as written in the input, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Unrecognized(raw) => raw.get("type").and_then(Value::as_str),
            known => known.kind().map(TypeKind::tag),
        }
    }

    /// Builds a descriptor from raw JSON. Never fails: unknown tags and malformed payloads
    /// are kept as [`TypeDescriptor::Unrecognized`].
    pub fn from_value(value: Value) -> Self {
        let Some(kind) = classify(&value) else {
            return Self::Unrecognized(value);
        };

        let decoded = match kind {
            TypeKind::Array => decode(&value).map(Self::Array),
            TypeKind::Conditional => decode(&value).map(Self::Conditional),
            TypeKind::IndexedAccess => decode(&value).map(Self::IndexedAccess),
            TypeKind::Inferred => decode(&value).map(Self::Inferred),
            TypeKind::Intersection => decode(&value).map(Self::Intersection),
            TypeKind::Intrinsic => decode(&value).map(Self::Intrinsic),
            TypeKind::Predicate => decode(&value).map(Self::Predicate),
            TypeKind::Reference => decode(&value).map(Self::Reference),
            TypeKind::Reflection => decode(&value).map(Self::Reflection),
            TypeKind::Literal => decode(&value).map(Self::Literal),
            TypeKind::Tuple => decode(&value).map(Self::Tuple),
            TypeKind::TypeOperator => decode(&value).map(Self::TypeOperator),
            TypeKind::Union => decode(&value).map(Self::Union),
            TypeKind::Unknown => decode(&value).map(Self::Unknown),
        };

        decoded.unwrap_or(Self::Unrecognized(value))
    }

    pub fn intrinsic(name: impl Into<String>) -> Self {
        Self::Intrinsic(NamedType {
            name: name.into(),
            extra: IndexMap::new(),
        })
    }

    pub fn reference(name: impl Into<String>, type_arguments: Option<Vec<TypeDescriptor>>) -> Self {
        Self::Reference(ReferenceType {
            name: name.into(),
            id: None,
            type_arguments,
            qualified_name: None,
            package: None,
            extra: IndexMap::new(),
        })
    }

    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array(ArrayType {
            element_type: Box::new(element),
            extra: IndexMap::new(),
        })
    }

    pub fn union(types: Vec<TypeDescriptor>) -> Self {
        Self::Union(CompositeType {
            types,
            extra: IndexMap::new(),
        })
    }

    pub fn literal(value: LiteralValue) -> Self {
        Self::Literal(LiteralType {
            value,
            extra: IndexMap::new(),
        })
    }

    pub fn reflection(declaration: DeclarationNode) -> Self {
        Self::Reflection(ReflectionType {
            declaration: Some(Box::new(declaration)),
            extra: IndexMap::new(),
        })
    }
}

/// Decodes a known payload. The `type` tag is dropped first so it does not land in `extra`.
fn decode<T: DeserializeOwned>(value: &Value) -> Option<T> {
    let mut payload = value.as_object()?.clone();
    payload.remove("type");

    match T::deserialize(Value::Object(payload)) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            tracing::debug!(target: "tanuki::docs", %error, "malformed type descriptor payload");
            None
        }
    }
}

impl<'de> Deserialize<'de> for TypeDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    #[serde(rename = "type")]
    tag: &'static str,
    #[serde(flatten)]
    payload: &'a T,
}

fn tagged<S: Serializer, T: Serialize>(
    serializer: S,
    kind: TypeKind,
    payload: &T,
) -> Result<S::Ok, S::Error> {
    Tagged {
        tag: kind.tag(),
        payload,
    }
    .serialize(serializer)
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Array(p) => tagged(serializer, TypeKind::Array, p),
            Self::Conditional(p) => tagged(serializer, TypeKind::Conditional, p),
            Self::IndexedAccess(p) => tagged(serializer, TypeKind::IndexedAccess, p),
            Self::Inferred(p) => tagged(serializer, TypeKind::Inferred, p),
            Self::Intersection(p) => tagged(serializer, TypeKind::Intersection, p),
            Self::Intrinsic(p) => tagged(serializer, TypeKind::Intrinsic, p),
            Self::Predicate(p) => tagged(serializer, TypeKind::Predicate, p),
            Self::Reference(p) => tagged(serializer, TypeKind::Reference, p),
            Self::Reflection(p) => tagged(serializer, TypeKind::Reflection, p),
            Self::Literal(p) => tagged(serializer, TypeKind::Literal, p),
            Self::Tuple(p) => tagged(serializer, TypeKind::Tuple, p),
            Self::TypeOperator(p) => tagged(serializer, TypeKind::TypeOperator, p),
            Self::Union(p) => tagged(serializer, TypeKind::Union, p),
            Self::Unknown(p) => tagged(serializer, TypeKind::Unknown, p),
            Self::Unrecognized(raw) => raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_nested_descriptors() {
        let raw = json!({
            "type": "reference",
            "name": "Promise",
            "typeArguments": [{ "type": "array", "elementType": { "type": "intrinsic", "name": "string" } }]
        });

        let descriptor: TypeDescriptor = serde_json::from_value(raw).unwrap();
        let TypeDescriptor::Reference(reference) = descriptor else {
            panic!("expected a reference");
        };
        assert_eq!(reference.name, "Promise");
        assert_eq!(
            reference.type_arguments,
            Some(vec![TypeDescriptor::array(TypeDescriptor::intrinsic("string"))])
        );
    }

    #[test]
    fn unknown_tags_keep_their_raw_json() {
        let raw = json!({ "type": "mapped", "parameter": "K" });
        let descriptor: TypeDescriptor = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(descriptor, TypeDescriptor::Unrecognized(raw.clone()));
        assert_eq!(descriptor.kind(), None);
        assert_eq!(descriptor.tag(), Some("mapped"));
        assert_eq!(serde_json::to_value(&descriptor).unwrap(), raw);
    }

    #[test]
    fn unmodelled_fields_are_written_back() {
        let raw = json!({
            "type": "reference",
            "target": { "sourceFileName": "src/index.ts", "qualifiedName": "T" },
            "name": "T",
            "package": "demo",
            "refersToTypeParameter": true
        });
        let descriptor = TypeDescriptor::from_value(raw.clone());

        let TypeDescriptor::Reference(reference) = &descriptor else {
            panic!("expected a reference");
        };
        assert_eq!(reference.extra.get("refersToTypeParameter"), Some(&json!(true)));
        assert!(!reference.extra.contains_key("type"));
        assert_eq!(serde_json::to_value(&descriptor).unwrap(), raw);
    }

    #[test]
    fn malformed_known_payload_is_unrecognized() {
        let raw = json!({ "type": "array" });
        let descriptor = TypeDescriptor::from_value(raw.clone());
        assert_eq!(descriptor, TypeDescriptor::Unrecognized(raw));
    }

    #[test]
    fn serializes_with_the_type_tag() {
        let descriptor = TypeDescriptor::reference("Foo", Some(vec![TypeDescriptor::intrinsic("T")]));
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "type": "reference",
                "name": "Foo",
                "typeArguments": [{ "type": "intrinsic", "name": "T" }]
            })
        );
    }

    #[test]
    fn literal_values_cover_bigint() {
        let descriptor: TypeDescriptor = serde_json::from_value(json!({
            "type": "literal",
            "value": { "value": "100", "negative": true }
        }))
        .unwrap();

        assert_eq!(
            descriptor,
            TypeDescriptor::literal(LiteralValue::BigInt {
                value: "100".to_string(),
                negative: true
            })
        );
    }
}
