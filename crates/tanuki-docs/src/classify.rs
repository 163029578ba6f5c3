//! Kind classification for typedoc type descriptors.
//!
//! A descriptor is identified solely by its `type` discriminant. Anything without one of
//! the fourteen known tags is not an error; callers treat it as unrecognized and render it
//! as `"unknown"`.

use serde_json::Value;

/// The fourteen type descriptor variants understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Array,
    Conditional,
    IndexedAccess,
    Inferred,
    Intersection,
    Intrinsic,
    Predicate,
    Reference,
    Reflection,
    Literal,
    Tuple,
    TypeOperator,
    Union,
    Unknown,
}

impl TypeKind {
    /// Every known kind, in classification order.
    pub const ALL: [TypeKind; 14] = [
        TypeKind::Array,
        TypeKind::Conditional,
        TypeKind::IndexedAccess,
        TypeKind::Inferred,
        TypeKind::Intersection,
        TypeKind::Intrinsic,
        TypeKind::Predicate,
        TypeKind::Reference,
        TypeKind::Reflection,
        TypeKind::Literal,
        TypeKind::Tuple,
        TypeKind::TypeOperator,
        TypeKind::Union,
        TypeKind::Unknown,
    ];

    /// The discriminant string typedoc writes in the `type` field.
    pub const fn tag(self) -> &'static str {
        match self {
            TypeKind::Array => "array",
            TypeKind::Conditional => "conditional",
            TypeKind::IndexedAccess => "indexedAccess",
            TypeKind::Inferred => "inferred",
            TypeKind::Intersection => "intersection",
            TypeKind::Intrinsic => "intrinsic",
            TypeKind::Predicate => "predicate",
            TypeKind::Reference => "reference",
            TypeKind::Reflection => "reflection",
            TypeKind::Literal => "literal",
            TypeKind::Tuple => "tuple",
            TypeKind::TypeOperator => "typeOperator",
            TypeKind::Union => "union",
            TypeKind::Unknown => "unknown",
        }
    }

    /// Looks up a kind by its exact tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Predicate form: `true` when `value` is an object whose `type` equals this kind's tag.
    pub fn matches(self, value: &Value) -> bool {
        discriminant(value) == Some(self.tag())
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classifies an arbitrary JSON value as one of the known descriptor kinds.
///
/// Returns `None` for non-objects, objects without a string `type`, and unknown tags.
pub fn classify(value: &Value) -> Option<TypeKind> {
    discriminant(value).and_then(TypeKind::from_tag)
}

fn discriminant(value: &Value) -> Option<&str> {
    value.as_object()?.get("type")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_every_known_tag() {
        for kind in TypeKind::ALL {
            let value = json!({ "type": kind.tag() });
            assert_eq!(classify(&value), Some(kind));
        }
    }

    #[test]
    fn predicates_are_mutually_exclusive() {
        for kind in TypeKind::ALL {
            let value = json!({ "type": kind.tag(), "name": "x" });
            let matching: Vec<_> = TypeKind::ALL
                .into_iter()
                .filter(|candidate| candidate.matches(&value))
                .collect();
            assert_eq!(matching, vec![kind]);
        }
    }

    #[test]
    fn unrecognized_shapes_classify_as_none() {
        assert_eq!(classify(&json!({ "type": "mapped" })), None);
        assert_eq!(classify(&json!({ "type": "Array" })), None);
        assert_eq!(classify(&json!({ "type": 3 })), None);
        assert_eq!(classify(&json!({ "name": "string" })), None);
        assert_eq!(classify(&json!("array")), None);
        assert_eq!(classify(&Value::Null), None);
    }
}
