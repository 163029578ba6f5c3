use super::signature::callable_block;
use super::DeclarationSerializer;
use crate::block::{Fragment, SignaturesFragment};
use crate::model::DeclarationNode;

/// Free functions. Same shape as methods.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionSerializer;

impl DeclarationSerializer for FunctionSerializer {
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
