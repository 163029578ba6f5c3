#![deny(clippy::all)]

//! Reflection-to-docs.json serialization for Tanuki projects.
//!
//! This crate provides:
//! - A model of typedoc's reflection tree and its structured type descriptors.
//! - A classifier and a canonical string renderer for type descriptors.
//! - Per-kind declaration serializers selected through a [`SerializerRegistry`].
//! - A tree walker and [`Documentation`], which writes the final `docs.json`.

pub mod block;
pub mod classify;
pub mod document;
pub mod error;
pub mod model;
pub mod render;
pub mod serializers;
pub mod source;
pub mod walker;

pub use block::{Fragment, SerializedBlock, SignatureBlock, TypeBlock};
pub use classify::{classify, TypeKind};
pub use document::{DocsOptions, DocumentOutput, Documentation, DEFAULT_OUTPUT, FORMAT_VERSION};
pub use error::{DocsError, Result};
pub use model::{DeclarationKind, DeclarationNode, ProjectReflection, TypeDescriptor};
pub use render::{render_optional, render_type};
pub use serializers::{AccessorSerializer, DeclarationSerializer, SerializerRegistry};
pub use source::{InMemorySource, JsonFileSource, ReflectionSource};
pub use walker::TreeWalker;
