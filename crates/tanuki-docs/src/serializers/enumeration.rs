use super::DeclarationSerializer;
use crate::block::{EnumFragment, EnumMemberBlock, Fragment};
use crate::model::{DeclarationNode, TypeDescriptor};
use crate::render::render_type;

/// Enums. Each member's value comes from its literal type, falling back to `defaultValue`
/// for reflections produced by older typedoc releases.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumSerializer;

impl DeclarationSerializer for EnumSerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        let members = declaration
            .children()
            .iter()
            .map(|member| EnumMemberBlock {
                name: member.name.clone(),
                value: match &member.type_ {
                    Some(literal @ TypeDescriptor::Literal(_)) => Some(render_type(literal)),
                    _ => member.default_value.clone(),
                },
                comment: member.comment.clone(),
            })
            .collect();

        Fragment::Enum(EnumFragment { members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, DeclarationKind, LiteralValue};
    use serde_json::json;

    #[test]
    fn members_prefer_literal_types() {
        let mut modern = DeclarationNode::new("App", DeclarationKind::EnumMember);
        modern.type_ = Some(TypeDescriptor::literal(LiteralValue::String("app".into())));
        modern.comment = Some(Comment::short("Application build"));

        let mut legacy = DeclarationNode::new("Library", DeclarationKind::EnumMember);
        legacy.default_value = Some("1".to_string());

        let bare = DeclarationNode::new("Unset", DeclarationKind::EnumMember);

        let mut node = DeclarationNode::new("BuildMode", DeclarationKind::Enum);
        node.children = Some(vec![modern, legacy, bare]);

        assert_eq!(
            serde_json::to_value(EnumSerializer.serialize(&node)).unwrap(),
            json!({
                "members": [
                    { "name": "App", "value": "'app'", "comment": { "shortText": "Application build" } },
                    { "name": "Library", "value": "1" },
                    { "name": "Unset" }
                ]
            })
        );
    }
}
