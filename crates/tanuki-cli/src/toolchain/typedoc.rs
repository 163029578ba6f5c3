//! Typedoc as the reflection source for docs.json.

use std::path::{Path, PathBuf};

use tanuki_docs::{DocsError, JsonFileSource, ProjectReflection, ReflectionSource};
use tracing::{debug, info};

use crate::config::Project;
use crate::toolchain::shell::Shell;

const TYPEDOC_OPTION_FILES: &[&str] = &["typedoc.json", "typedoc.js", "typedoc.cjs"];

/// Runs `typedoc --json` into a temporary file and reads it back.
#[derive(Debug, Clone)]
pub struct TypedocSource {
    shell: Shell,
    entry_points: Vec<String>,
    tsconfig: Option<PathBuf>,
    options_file: Option<PathBuf>,
}

impl TypedocSource {
    pub fn new(shell: Shell, entry_points: Vec<String>) -> Self {
        Self {
            shell,
            entry_points,
            tsconfig: None,
            options_file: None,
        }
    }

    pub fn tsconfig(mut self, tsconfig: Option<PathBuf>) -> Self {
        self.tsconfig = tsconfig;
        self
    }

    pub fn options_file(mut self, options_file: Option<PathBuf>) -> Self {
        self.options_file = options_file;
        self
    }

    pub fn for_project(project: &Project) -> Self {
        let typedoc = &project.config.typedoc;
        let options_file = if typedoc.find_typedoc_file {
            find_options_file(&project.root)
        } else {
            None
        };

        Self::new(Shell::new(&project.root), typedoc.entry_points.clone())
            .tsconfig(project.config.tsconfig.as_ref().map(|p| project.resolve(p)))
            .options_file(options_file)
    }

    pub fn args(&self, json_out: &Path) -> Vec<String> {
        let mut args = vec![
            "--json".to_string(),
            json_out.display().to_string(),
            "--excludeInternal".to_string(),
            "--excludePrivate".to_string(),
            "--excludeProtected".to_string(),
        ];

        for entry in &self.entry_points {
            args.push("--entryPoints".to_string());
            args.push(entry.clone());
        }
        if let Some(tsconfig) = &self.tsconfig {
            args.push("--tsconfig".to_string());
            args.push(tsconfig.display().to_string());
        }
        if let Some(options) = &self.options_file {
            args.push("--options".to_string());
            args.push(options.display().to_string());
        }

        args
    }
}

impl ReflectionSource for TypedocSource {
    fn load(&self) -> tanuki_docs::Result<ProjectReflection> {
        let typedoc = self
            .shell
            .resolve_node_tool("typedoc")
            .map_err(DocsError::no_reflection)?;

        let scratch = tempfile::Builder::new()
            .prefix("tanuki-typedoc")
            .tempdir()
            .map_err(DocsError::no_reflection)?;
        let json_out = scratch.path().join("reflection.json");

        info!(target: "tanuki::docs", "Generating documentation...");
        let args = self.args(&json_out);
        self.shell
            .exec(&typedoc, &args)
            .map_err(DocsError::no_reflection)?;

        if !json_out.is_file() {
            return Err(DocsError::no_reflection("typedoc did not write a reflection"));
        }

        debug!(target: "tanuki::docs", "Received project reflection.");
        JsonFileSource::new(json_out).load()
    }
}

/// First typedoc options file in `root`.
pub fn find_options_file(root: &Path) -> Option<PathBuf> {
    TYPEDOC_OPTION_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}
