use tracing::warn;

use super::signature::parameter_list;
use super::DeclarationSerializer;
use crate::block::{Fragment, SignatureBlock, SignaturesFragment, TypeBlock};
use crate::model::DeclarationNode;

/// Constructors: `type` carries only the tag and `as_string` has no return suffix.
///
/// Signatures without a type are dropped with a warning instead of failing the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstructorSerializer;

impl DeclarationSerializer for ConstructorSerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        let mut signatures = Vec::new();

        for signature in declaration.signatures.as_deref().unwrap_or_default() {
            let Some(descriptor) = &signature.type_ else {
                warn!(
                    target: "tanuki::serialization::constructor",
                    constructor = %declaration.name,
                    signature = %serde_json::to_string(signature).unwrap_or_default(),
                    "Unable to retrieve type for constructor signature, skipping"
                );
                continue;
            };

            signatures.push(SignatureBlock {
                type_: TypeBlock::tagged(descriptor),
                as_string: format!("{}{}", signature.name, parameter_list(signature)),
                params: None,
                return_type: None,
                comment: signature.comment.clone(),
            });
        }

        Fragment::Signatures(SignaturesFragment { signatures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::TypeSummary;
    use crate::model::{
        Comment, DeclarationKind, ParameterDescriptor, SignatureDescriptor, TypeDescriptor,
    };

    fn constructor(signatures: Vec<SignatureDescriptor>) -> DeclarationNode {
        let mut node = DeclarationNode::new("constructor", DeclarationKind::Constructor);
        node.signatures = Some(signatures);
        node
    }

    #[test]
    fn renders_call_text_without_return_type() {
        let mut signature = SignatureDescriptor::new(
            "new Client",
            Some(TypeDescriptor::reference("Client", None)),
        )
        .with_parameters(vec![ParameterDescriptor::new(
            "token",
            Some(TypeDescriptor::intrinsic("string")),
        )]);
        signature.comment = Some(Comment::short("Creates a client."));

        let Fragment::Signatures(fragment) = ConstructorSerializer.serialize(&constructor(vec![signature])) else {
            panic!("expected signatures");
        };

        let block = &fragment.signatures[0];
        assert_eq!(block.as_string, "new Client(token: string)");
        assert_eq!(block.type_.value, "Client");
        assert_eq!(block.type_.summary, Some(TypeSummary::Tag("reference".to_string())));
        assert!(block.params.is_none());
        assert!(block.return_type.is_none());
        assert_eq!(block.comment, Some(Comment::short("Creates a client.")));
    }

    #[test]
    fn typeless_signatures_are_skipped() {
        let node = constructor(vec![
            SignatureDescriptor::new("new Broken", None),
            SignatureDescriptor::new("new Client", Some(TypeDescriptor::reference("Client", None))),
        ]);

        let Fragment::Signatures(fragment) = ConstructorSerializer.serialize(&node) else {
            panic!("expected signatures");
        };
        assert_eq!(fragment.signatures.len(), 1);
        assert_eq!(fragment.signatures[0].as_string, "new Client()");
    }
}
