use super::signature::callable_block;
use super::{AccessorSerializer, DeclarationSerializer};
use crate::block::{AccessorFragment, Fragment, SignatureBlock};
use crate::model::{DeclarationNode, OneOrMany, SignatureDescriptor};

/// `get` signatures, rendered like method signatures.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetterSerializer;

impl AccessorSerializer for GetterSerializer {
    fn serialize(&self, signatures: &[SignatureDescriptor]) -> Vec<SignatureBlock> {
        signatures.iter().map(callable_block).collect()
    }
}

/// `set` signatures, rendered like method signatures.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetterSerializer;

impl AccessorSerializer for SetterSerializer {
    fn serialize(&self, signatures: &[SignatureDescriptor]) -> Vec<SignatureBlock> {
        signatures.iter().map(callable_block).collect()
    }
}

/// Accessor declarations: delegates to [`GetterSerializer`] and [`SetterSerializer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessorDeclarationSerializer;

impl DeclarationSerializer for AccessorDeclarationSerializer {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment {
        Fragment::Accessor(AccessorFragment {
            getters: accessor_blocks(&GetterSerializer, declaration.get_signature.as_ref()),
            setters: accessor_blocks(&SetterSerializer, declaration.set_signature.as_ref()),
        })
    }
}

fn accessor_blocks(
    serializer: &dyn AccessorSerializer,
    signatures: Option<&OneOrMany<SignatureDescriptor>>,
) -> Option<Vec<SignatureBlock>> {
    signatures.map(|signatures| serializer.serialize(signatures.as_slice()))
}
