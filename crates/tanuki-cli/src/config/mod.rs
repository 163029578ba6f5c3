//! Configuration system for Tanuki with multi-source loading.
//!
//! Merges settings from CLI flags, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod discovery;
mod loading;
mod types;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use defaults::*;
pub use discovery::{ConfigDiscovery, ConfigSource, PACKAGE_FIELD};
pub use loading::ConfigOverrides;
pub use types::*;

/// Tanuki configuration - loaded from package.json, a .tanukirc file or tanuki.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TanukiConfig {
    /// Project name, also the stem of library artifacts
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub build: BuildArtifactsConfig,

    #[serde(default)]
    pub eslint: EslintConfig,

    /// Explicit tsconfig.json, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsconfig: Option<PathBuf>,

    #[serde(default)]
    pub typedoc: TypedocConfig,
}

impl Default for TanukiConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            build: BuildArtifactsConfig::default(),
            eslint: EslintConfig::default(),
            tsconfig: None,
            typedoc: TypedocConfig::default(),
        }
    }
}

/// A project root together with its resolved configuration.
///
/// Commands receive this value explicitly instead of reading shared state.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: TanukiConfig,
    /// The file the configuration was read from, if any
    pub config_file: Option<PathBuf>,
}

impl Project {
    /// Discovers, loads and validates the configuration of `root`.
    pub fn load(
        root: impl AsRef<Path>,
        explicit: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> crate::error::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let (config, source) = TanukiConfig::discover(&root, explicit, overrides)?;
        config.validate()?;

        Ok(Self {
            root,
            config,
            config_file: source.map(|s| s.path().to_path_buf()),
        })
    }

    /// Resolves `path` against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Absolute docs.json location.
    pub fn docs_output(&self) -> PathBuf {
        self.resolve(&self.config.typedoc.out)
    }
}
