//! Recursive walk from a project reflection to serialized blocks.

use tracing::warn;

use crate::block::{ContainerFragment, Fragment, SerializedBlock};
use crate::model::DeclarationNode;
use crate::serializers::SerializerRegistry;

/// Walks a reflection tree, dispatching each declaration through a [`SerializerRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'r> {
    registry: &'r SerializerRegistry,
}

impl<'r> TreeWalker<'r> {
    pub fn new(registry: &'r SerializerRegistry) -> Self {
        Self { registry }
    }

    /// Serializes every top-level child of `root`, in source order.
    pub fn walk(&self, root: &DeclarationNode) -> Vec<SerializedBlock> {
        root.children()
            .iter()
            .map(|child| self.serialize_declaration(child))
            .collect()
    }

    /// Serializes one declaration. Containers recurse; kinds without a serializer produce
    /// a block with only `name`, `kind` and `comment`.
    pub fn serialize_declaration(&self, declaration: &DeclarationNode) -> SerializedBlock {
        let kind = declaration.declaration_kind();

        let fragment = if kind.is_container() {
            let children = self.walk(declaration);
            (!children.is_empty()).then(|| Fragment::Container(ContainerFragment { children }))
        } else if let Some(serializer) = self.registry.get(kind) {
            Some(serializer.serialize(declaration))
        } else {
            warn!(
                target: "tanuki::docs",
                "Unknown {}: {}",
                declaration.kind_label(),
                declaration.name
            );
            None
        };

        SerializedBlock {
            name: declaration.name.clone(),
            kind: declaration.kind_label(),
            comment: declaration.comment.clone(),
            fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, DeclarationKind, TypeDescriptor};
    use serde_json::json;

    #[test]
    fn empty_container_omits_children() {
        let registry = SerializerRegistry::default();
        let mut class = DeclarationNode::new("Empty", DeclarationKind::Class);
        class.comment = Some(Comment::short("Nothing here."));

        let block = TreeWalker::new(&registry).serialize_declaration(&class);
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({ "name": "Empty", "kind": "Class", "comment": { "shortText": "Nothing here." } })
        );
    }

    #[test]
    fn namespaces_recurse() {
        let registry = SerializerRegistry::default();
        let mut constant = DeclarationNode::new("LIMIT", DeclarationKind::Variable);
        constant.type_ = Some(TypeDescriptor::intrinsic("number"));
        let mut namespace = DeclarationNode::new("limits", DeclarationKind::Namespace);
        namespace.children = Some(vec![constant]);

        let block = TreeWalker::new(&registry).serialize_declaration(&namespace);
        assert_eq!(block.children().len(), 1);
        assert_eq!(block.children()[0].name, "LIMIT");
    }

    #[test]
    fn unknown_kind_yields_base_block() {
        let registry = SerializerRegistry::default();
        let mut node = DeclarationNode::new("legacy", DeclarationKind::Reference);
        node.type_ = Some(TypeDescriptor::intrinsic("string"));

        let block = TreeWalker::new(&registry).serialize_declaration(&node);
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({ "name": "legacy", "kind": "Reference" })
        );
    }

    #[test]
    fn unregistered_kinds_fall_back_to_base_block() {
        let registry = SerializerRegistry::empty();
        let mut node = DeclarationNode::new("run", DeclarationKind::Function);
        node.kind_string = None;

        let block = TreeWalker::new(&registry).serialize_declaration(&node);
        assert_eq!(block.kind, "Function");
        assert!(block.fragment.is_none());
    }
}
