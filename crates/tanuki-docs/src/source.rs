//! Where reflection trees come from.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DocsError, Result};
use crate::model::ProjectReflection;

/// Produces the project reflection tree consumed by [`crate::Documentation`].
///
/// The CLI implements this by running typedoc; tests and pre-generated reflections use
/// [`JsonFileSource`] or [`InMemorySource`].
pub trait ReflectionSource {
    /// Loads the tree. Returns [`DocsError::NoReflection`] when none could be produced.
    fn load(&self) -> Result<ProjectReflection>;
}

/// Reads a typedoc `--json` project file from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReflectionSource for JsonFileSource {
    fn load(&self) -> Result<ProjectReflection> {
        debug!(target: "tanuki::docs", path = %self.path.display(), "reading reflection");

        let raw = fs::read_to_string(&self.path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                DocsError::no_reflection(format!("'{}' does not exist", self.path.display()))
            } else {
                DocsError::io(&self.path, error)
            }
        })?;

        serde_json::from_str(&raw).map_err(|error| DocsError::Json {
            path: self.path.clone(),
            error,
        })
    }
}

/// A tree that is already in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource(pub ProjectReflection);

impl ReflectionSource for InMemorySource {
    fn load(&self) -> Result<ProjectReflection> {
        Ok(self.0.clone())
    }
}

impl<S: ReflectionSource + ?Sized> ReflectionSource for &S {
    fn load(&self) -> Result<ProjectReflection> {
        (**self).load()
    }
}
