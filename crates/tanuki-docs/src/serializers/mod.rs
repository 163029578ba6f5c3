//! Per-declaration serializers and the kind-to-serializer table.
//!
//! Serializers only produce the keys specific to their kind. The walker supplies `name`,
//! `kind` and the outer `comment`.

mod accessor;
mod constructor;
mod enumeration;
mod function;
mod method;
mod signature;
mod type_alias;
mod variable;

use rustc_hash::FxHashMap;

use crate::block::{Fragment, SignatureBlock};
use crate::model::{DeclarationKind, DeclarationNode, SignatureDescriptor};

pub use accessor::{AccessorDeclarationSerializer, GetterSerializer, SetterSerializer};
pub use constructor::ConstructorSerializer;
pub use enumeration::EnumSerializer;
pub use function::FunctionSerializer;
pub use method::MethodSerializer;
pub use type_alias::TypeAliasSerializer;
pub use variable::{PropertySerializer, VariableSerializer};

/// Serializes one declaration kind into its fragment.
pub trait DeclarationSerializer: Send + Sync {
    fn serialize(&self, declaration: &DeclarationNode) -> Fragment;
}

/// Serializes the get or set signatures of an accessor.
pub trait AccessorSerializer: Send + Sync {
    fn serialize(&self, signatures: &[SignatureDescriptor]) -> Vec<SignatureBlock>;
}

/// Strategy table mapping declaration kinds to serializers.
///
/// Container kinds are never looked up here; the walker recurses into them directly.
pub struct SerializerRegistry {
    serializers: FxHashMap<DeclarationKind, Box<dyn DeclarationSerializer>>,
}

impl SerializerRegistry {
    /// A table with no entries. Every non-container kind is then treated as unknown.
    pub fn empty() -> Self {
        Self {
            serializers: FxHashMap::default(),
        }
    }

    /// Registers (or replaces) the serializer for `kind`.
    pub fn register(
        &mut self,
        kind: DeclarationKind,
        serializer: impl DeclarationSerializer + 'static,
    ) -> &mut Self {
        self.serializers.insert(kind, Box::new(serializer));
        self
    }

    pub fn get(&self, kind: DeclarationKind) -> Option<&dyn DeclarationSerializer> {
        self.serializers.get(&kind).map(Box::as_ref)
    }

    pub fn contains(&self, kind: DeclarationKind) -> bool {
        self.serializers.contains_key(&kind)
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(DeclarationKind::Constructor, ConstructorSerializer)
            .register(DeclarationKind::Method, MethodSerializer)
            .register(DeclarationKind::Function, FunctionSerializer)
            .register(DeclarationKind::Variable, VariableSerializer)
            .register(DeclarationKind::Property, PropertySerializer)
            .register(DeclarationKind::Enum, EnumSerializer)
            .register(DeclarationKind::TypeAlias, TypeAliasSerializer)
            .register(DeclarationKind::Accessor, AccessorDeclarationSerializer);
        registry
    }
}

impl std::fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.serializers.keys()).finish()
    }
}
