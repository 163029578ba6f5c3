//! Canonical textual rendering of type descriptors.
//!
//! The output grammar is part of the docs.json contract: consumers diff `value` and
//! `as_string` fields textually, so every separator below is load-bearing.

use indexmap::IndexMap;

use crate::model::{LiteralValue, ReflectionType, SignatureDescriptor, TypeDescriptor};

/// Rendered in place of anything the renderer cannot describe.
pub const UNKNOWN: &str = "unknown";

/// Placeholder parameter list for callable reflections without parameters.
const REST_ARGS: &str = "...args: any[]";

/// Renders a descriptor to its canonical string form.
///
/// Total and pure. Recursion depth follows the input depth; reflection trees are acyclic.
pub fn render_type(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::Array(array) => format!("{}[]", render_type(&array.element_type)),
        TypeDescriptor::Conditional(conditional) => format!(
            "{} extends {} ? {} : {}",
            render_type(&conditional.check_type),
            render_type(&conditional.extends_type),
            render_type(&conditional.true_type),
            render_type(&conditional.false_type),
        ),
        TypeDescriptor::IndexedAccess(access) => format!(
            "{}[{}]",
            render_type(&access.object_type),
            render_type(&access.index_type)
        ),
        // Members are joined as-is; only unions drop blank members.
        TypeDescriptor::Intersection(intersection) => join(&intersection.types, " & "),
        TypeDescriptor::Predicate(predicate) => {
            let mut out = String::new();
            if predicate.asserts {
                out.push_str("asserts ");
            }
            out.push_str(&predicate.name);
            if let Some(target) = &predicate.target_type {
                out.push_str(" is ");
                out.push_str(&render_type(target));
            }
            out
        }
        TypeDescriptor::Reference(reference) => match &reference.type_arguments {
            Some(arguments) => format!("{}<{}>", reference.name, join(arguments, ", ")),
            None => reference.name.clone(),
        },
        TypeDescriptor::Reflection(reflection) => render_reflection(reflection),
        TypeDescriptor::Literal(literal) => render_literal(&literal.value),
        TypeDescriptor::Tuple(tuple) => {
            format!("[{}]", join(tuple.elements.as_deref().unwrap_or_default(), ", "))
        }
        TypeDescriptor::TypeOperator(operator) => {
            format!("{} {}", operator.operator, render_type(&operator.target))
        }
        TypeDescriptor::Union(union) => union
            .types
            .iter()
            .map(render_type)
            .filter(|member| !member.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" | "),
        TypeDescriptor::Inferred(named)
        | TypeDescriptor::Intrinsic(named)
        | TypeDescriptor::Unknown(named) => named.name.clone(),
        TypeDescriptor::Unrecognized(_) => UNKNOWN.to_string(),
    }
}

/// Renders an optional descriptor, falling back to `"unknown"` when absent.
pub fn render_optional(descriptor: Option<&TypeDescriptor>) -> String {
    descriptor.map_or_else(|| UNKNOWN.to_string(), render_type)
}

fn join(types: &[TypeDescriptor], separator: &str) -> String {
    types
        .iter()
        .map(render_type)
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(text) => format!("'{text}'"),
        LiteralValue::Number(number) => number.to_string(),
        LiteralValue::Bool(flag) => flag.to_string(),
        LiteralValue::Null => "null".to_string(),
        LiteralValue::BigInt { value, negative } => {
            format!("{}{value}n", if *negative { "-" } else { "" })
        }
    }
}

fn render_reflection(reflection: &ReflectionType) -> String {
    let Some(declaration) = reflection.declaration.as_deref() else {
        return "{}".to_string();
    };

    let children = declaration.children();
    if !children.is_empty() {
        // Later members with a duplicate name overwrite earlier ones in place.
        let mut members: IndexMap<&str, String> = IndexMap::new();
        for child in children {
            if let Some(member_type) = &child.type_ {
                members.insert(child.name.as_str(), render_type(member_type));
            }
        }

        let body = members
            .iter()
            .map(|(name, rendered)| format!("{name}: {rendered}"))
            .collect::<Vec<_>>()
            .join(",\n");
        return format!("{{\n{body}\n}}");
    }

    let signatures = declaration.signatures.as_deref().unwrap_or_default();
    if !signatures.is_empty() {
        return signatures
            .iter()
            .map(render_callable)
            .collect::<Vec<_>>()
            .join("\n");
    }

    "{}".to_string()
}

fn render_callable(signature: &SignatureDescriptor) -> String {
    let parameters = match &signature.parameters {
        Some(parameters) => parameters
            .iter()
            .map(|parameter| {
                format!(
                    "{}: {}",
                    parameter.name,
                    render_optional(parameter.type_.as_ref())
                )
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => REST_ARGS.to_string(),
    };

    format!(
        "({parameters}) => {}",
        render_optional(signature.type_.as_ref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclarationKind, DeclarationNode, ParameterDescriptor};
    use serde_json::json;

    fn parse(value: serde_json::Value) -> TypeDescriptor {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reference_with_arguments() {
        let descriptor =
            TypeDescriptor::reference("Foo", Some(vec![TypeDescriptor::reference("T", None)]));
        assert_eq!(render_type(&descriptor), "Foo<T>");
    }

    #[test]
    fn array_of_intrinsic() {
        let descriptor = TypeDescriptor::array(TypeDescriptor::intrinsic("string"));
        assert_eq!(render_type(&descriptor), "string[]");
    }

    #[test]
    fn union_drops_blank_members() {
        let descriptor = TypeDescriptor::union(vec![
            TypeDescriptor::intrinsic("string"),
            TypeDescriptor::intrinsic(""),
            TypeDescriptor::intrinsic("  "),
        ]);
        assert_eq!(render_type(&descriptor), "string");
    }

    #[test]
    fn intersection_keeps_blank_members() {
        let descriptor = parse(json!({
            "type": "intersection",
            "types": [{ "type": "intrinsic", "name": "A" }, { "type": "intrinsic", "name": "" }]
        }));
        assert_eq!(render_type(&descriptor), "A & ");
    }

    #[test]
    fn literals() {
        assert_eq!(
            render_type(&TypeDescriptor::literal(LiteralValue::String("hello".into()))),
            "'hello'"
        );
        assert_eq!(render_type(&parse(json!({ "type": "literal", "value": 42 }))), "42");
        assert_eq!(render_type(&parse(json!({ "type": "literal", "value": true }))), "true");
        assert_eq!(render_type(&parse(json!({ "type": "literal", "value": null }))), "null");
        assert_eq!(
            render_type(&parse(json!({
                "type": "literal",
                "value": { "value": "9007199254740993", "negative": false }
            }))),
            "9007199254740993n"
        );
    }

    #[test]
    fn conditional_and_indexed_access() {
        let descriptor = parse(json!({
            "type": "conditional",
            "checkType": { "type": "reference", "name": "T" },
            "extendsType": { "type": "intrinsic", "name": "string" },
            "trueType": { "type": "literal", "value": "yes" },
            "falseType": {
                "type": "indexedAccess",
                "objectType": { "type": "reference", "name": "T" },
                "indexType": { "type": "literal", "value": "key" }
            }
        }));
        assert_eq!(
            render_type(&descriptor),
            "T extends string ? 'yes' : T['key']"
        );
    }

    #[test]
    fn predicates() {
        let asserts = parse(json!({
            "type": "predicate",
            "name": "value",
            "asserts": true,
            "targetType": { "type": "intrinsic", "name": "string" }
        }));
        assert_eq!(render_type(&asserts), "asserts value is string");

        let bare = parse(json!({ "type": "predicate", "name": "this", "asserts": true }));
        assert_eq!(render_type(&bare), "asserts this");
    }

    #[test]
    fn tuples_and_operators() {
        assert_eq!(render_type(&parse(json!({ "type": "tuple" }))), "[]");
        assert_eq!(
            render_type(&parse(json!({
                "type": "tuple",
                "elements": [{ "type": "intrinsic", "name": "string" }, { "type": "intrinsic", "name": "number" }]
            }))),
            "[string, number]"
        );
        assert_eq!(
            render_type(&parse(json!({
                "type": "typeOperator",
                "operator": "keyof",
                "target": { "type": "reference", "name": "Options" }
            }))),
            "keyof Options"
        );
    }

    #[test]
    fn reflection_object_shape() {
        let mut literal = DeclarationNode::new("__type", DeclarationKind::TypeLiteral);
        let mut first = DeclarationNode::new("id", DeclarationKind::Property);
        first.type_ = Some(TypeDescriptor::intrinsic("string"));
        let untyped = DeclarationNode::new("skipped", DeclarationKind::Property);
        let mut second = DeclarationNode::new("tags", DeclarationKind::Property);
        second.type_ = Some(TypeDescriptor::array(TypeDescriptor::intrinsic("string")));
        literal.children = Some(vec![first, untyped, second]);

        let descriptor = TypeDescriptor::reflection(literal);
        assert_eq!(render_type(&descriptor), "{\nid: string,\ntags: string[]\n}");
    }

    #[test]
    fn reflection_callable_shape() {
        let mut literal = DeclarationNode::new("__type", DeclarationKind::TypeLiteral);
        literal.signatures = Some(vec![
            crate::model::SignatureDescriptor::new(
                "__call",
                Some(TypeDescriptor::intrinsic("void")),
            )
            .with_parameters(vec![
                ParameterDescriptor::new("a", Some(TypeDescriptor::intrinsic("number"))),
                ParameterDescriptor::new("b", None),
            ]),
            crate::model::SignatureDescriptor::new("__call", None),
        ]);

        let descriptor = TypeDescriptor::reflection(literal);
        assert_eq!(
            render_type(&descriptor),
            "(a: number, b: unknown) => void\n(...args: any[]) => unknown"
        );
    }

    #[test]
    fn empty_reflection() {
        assert_eq!(render_type(&parse(json!({ "type": "reflection" }))), "{}");
        assert_eq!(
            render_type(&parse(json!({ "type": "reflection", "declaration": { "name": "__type" } }))),
            "{}"
        );
    }

    #[test]
    fn named_variants_render_their_name() {
        for tag in ["inferred", "intrinsic", "unknown"] {
            assert_eq!(render_type(&parse(json!({ "type": tag, "name": "U" }))), "U");
        }
    }

    #[test]
    fn unrecognized_tags_render_unknown() {
        assert_eq!(render_type(&parse(json!({ "type": "mapped" }))), UNKNOWN);
        assert_eq!(render_type(&parse(json!({ "type": "template-literal" }))), UNKNOWN);
        assert_eq!(render_type(&parse(json!({ "name": "string" }))), UNKNOWN);
    }

    #[test]
    fn rendering_is_deterministic() {
        let descriptor = parse(json!({
            "type": "union",
            "types": [
                { "type": "reference", "name": "Map", "typeArguments": [
                    { "type": "intrinsic", "name": "string" },
                    { "type": "array", "elementType": { "type": "intrinsic", "name": "number" } }
                ]},
                { "type": "literal", "value": null }
            ]
        }));
        let first = render_type(&descriptor);
        assert_eq!(first, "Map<string, number[]> | null");
        assert_eq!(render_type(&descriptor.clone()), first);
    }
}
