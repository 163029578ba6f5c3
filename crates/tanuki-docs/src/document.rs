//! docs.json assembly and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::block::SerializedBlock;
use crate::error::{DocsError, Result};
use crate::model::ProjectReflection;
use crate::serializers::SerializerRegistry;
use crate::source::ReflectionSource;
use crate::walker::TreeWalker;

/// Version of the docs.json layout.
pub const FORMAT_VERSION: u32 = 1;

/// Default output location, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "docs/docs.json";

/// The top-level docs.json document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentOutput {
    pub format_version: u32,
    pub generated_at: DateTime<Utc>,
    pub workspaces: bool,
    pub children: Vec<SerializedBlock>,
}

impl DocumentOutput {
    /// Assembles a document stamped with the current time.
    pub fn assemble(root: &ProjectReflection, registry: &SerializerRegistry) -> Self {
        Self::assemble_at(root, registry, Utc::now())
    }

    pub fn assemble_at(
        root: &ProjectReflection,
        registry: &SerializerRegistry,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            generated_at,
            workspaces: false,
            children: TreeWalker::new(registry).walk(root),
        }
    }

    /// Pretty JSON with four-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes the document to `path`, creating parent directories and replacing any
    /// previous file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json().map_err(|error| DocsError::Json {
            path: path.to_path_buf(),
            error,
        })?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| DocsError::io(parent, error))?;
        }

        fs::write(path, json).map_err(|error| DocsError::io(path, error))
    }
}

/// Options for a documentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsOptions {
    /// Where docs.json is written.
    pub output: PathBuf,
    /// Multi-project output. Not supported; requesting it fails the run.
    pub workspaces: bool,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            workspaces: false,
        }
    }
}

/// Top-level docs entry point: load a reflection, assemble it, write docs.json.
#[derive(Debug)]
pub struct Documentation<S> {
    source: S,
    options: DocsOptions,
    registry: SerializerRegistry,
}

impl<S: ReflectionSource> Documentation<S> {
    pub fn new(source: S, options: DocsOptions) -> Self {
        Self {
            source,
            options,
            registry: SerializerRegistry::default(),
        }
    }

    /// Replaces the serializer table.
    pub fn with_registry(mut self, registry: SerializerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &DocsOptions {
        &self.options
    }

    /// Runs the pipeline and returns the path that was written.
    ///
    /// Workspace mode and a missing reflection fail without touching the output file. An
    /// empty project still produces a well-formed document.
    pub fn serialize(&self) -> Result<PathBuf> {
        if self.options.workspaces {
            error!(target: "tanuki::docs", "Workspaces are not supported at this given moment");
            return Err(DocsError::WorkspacesUnsupported);
        }

        info!(target: "tanuki::docs", "Now serializing project for documentation");
        let reflection = self.source.load()?;

        let document = DocumentOutput::assemble(&reflection, &self.registry);
        if document.children.is_empty() {
            warn!(
                target: "tanuki::docs",
                "No root elements were specified. Emitting empty documentation output"
            );
        }

        document.write_to(&self.options.output)?;
        info!(
            target: "tanuki::docs",
            path = %self.options.output.display(),
            declarations = document.children.len(),
            "Generated documentation"
        );

        Ok(self.options.output.clone())
    }
}
