use super::signature::callable_block;
use super::DeclarationSerializer;
use crate::block::{Fragment, SignaturesFragment};
use crate::model::DeclarationNode;

/// Class and interface methods.
#[derive(Debug, Default, Clone, Copy)]
pub struct MethodSerializer;

impl DeclarationSerializer for MethodSerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        Fragment::Signatures(SignaturesFragment {
            signatures: declaration
                .signatures
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(callable_block)
                .collect(),
        })
    }
}
