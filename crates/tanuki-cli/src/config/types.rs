use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::defaults::*;

/// How `tanuki build` produces artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildMode {
    /// Compile with tsc; esm, minify and docs are ignored.
    #[default]
    #[serde(rename = "app", alias = "application")]
    App,
    /// Bundle with esbuild.
    #[serde(rename = "library", alias = "lib")]
    Library,
}

impl BuildMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::App => "app",
            BuildMode::Library => "library",
        }
    }
}

impl From<crate::cli::BuildModeArg> for BuildMode {
    fn from(mode: crate::cli::BuildModeArg) -> Self {
        match mode {
            crate::cli::BuildModeArg::App => BuildMode::App,
            crate::cli::BuildModeArg::Library => BuildMode::Library,
        }
    }
}

/// Where published artifacts are uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uploader {
    #[default]
    Fs,
    S3,
}

/// `build` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildArtifactsConfig {
    /// Emit an ES module wrapper next to the CommonJS bundle
    #[serde(default)]
    pub esm: bool,

    /// Minify the bundle
    #[serde(default)]
    pub minify: bool,

    /// Write docs.json after a library build
    #[serde(default)]
    pub provide_docs: bool,

    #[serde(default)]
    pub uploader: Uploader,

    #[serde(default)]
    pub mode: BuildMode,
}

/// `eslint` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintConfig {
    /// Apply fixes while linting
    #[serde(default = "default_eslint_fix")]
    pub fix: bool,

    /// File extensions ESLint should pick up
    #[serde(default = "default_eslint_extensions")]
    pub extensions: Vec<String>,
}

impl Default for EslintConfig {
    fn default() -> Self {
        Self {
            fix: default_eslint_fix(),
            extensions: default_eslint_extensions(),
        }
    }
}

/// `typedoc.workspaces`: a flag or the list of workspace packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Workspaces {
    Enabled(bool),
    Packages(Vec<String>),
}

impl Workspaces {
    /// `true` when multi-project output was asked for.
    pub fn is_requested(&self) -> bool {
        match self {
            Workspaces::Enabled(enabled) => *enabled,
            Workspaces::Packages(_) => true,
        }
    }
}

impl Default for Workspaces {
    fn default() -> Self {
        Workspaces::Enabled(false)
    }
}

/// `typedoc` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedocConfig {
    #[serde(default)]
    pub workspaces: Workspaces,

    /// Let typedoc pick up typedoc.json / typedoc.js
    #[serde(default)]
    pub find_typedoc_file: bool,

    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,

    /// docs.json location, relative to the project root
    #[serde(default = "default_docs_out")]
    pub out: PathBuf,
}

impl Default for TypedocConfig {
    fn default() -> Self {
        Self {
            workspaces: Workspaces::default(),
            find_typedoc_file: false,
            entry_points: default_entry_points(),
            out: default_docs_out(),
        }
    }
}
