use super::DeclarationSerializer;
use crate::block::{Fragment, TypeBlock, TypedFragment};
use crate::model::DeclarationNode;

/// Module-level variables and constants, including their initializer text.
#[derive(Debug, Default, Clone, Copy)]
pub struct VariableSerializer;

impl DeclarationSerializer for VariableSerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        Fragment::Typed(TypedFragment {
            type_: Some(TypeBlock::describe(declaration.type_.as_ref())),
            default_value: declaration.default_value.clone(),
        })
    }
}

/// Class and interface properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertySerializer;

impl DeclarationSerializer for PropertySerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        Fragment::Typed(TypedFragment {
            type_: Some(TypeBlock::describe(declaration.type_.as_ref())),
            default_value: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclarationKind, TypeDescriptor};
    use serde_json::json;

    #[test]
    fn variable_keeps_its_initializer() {
        let mut node = DeclarationNode::new("VERSION", DeclarationKind::Variable);
        node.type_ = Some(TypeDescriptor::intrinsic("string"));
        node.default_value = Some("\"1.0.0\"".to_string());

        assert_eq!(
            serde_json::to_value(VariableSerializer.serialize(&node)).unwrap(),
            json!({
                "type": { "type": { "type": "intrinsic", "name": "string" }, "value": "string" },
                "default_value": "\"1.0.0\""
            })
        );
    }

    #[test]
    fn property_without_type_is_unknown() {
        let mut node = DeclarationNode::new("handler", DeclarationKind::Property);
        node.default_value = Some("noop".to_string());

        assert_eq!(
            serde_json::to_value(PropertySerializer.serialize(&node)).unwrap(),
            json!({ "type": { "value": "unknown" } })
        );
    }
}
