use crate::config::discovery::{load_package_field, ConfigDiscovery, ConfigSource};
use crate::config::{BuildMode, TanukiConfig};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// Values from command-line flags that override the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<BuildMode>,
    pub eslint_fix: Option<bool>,
    pub docs_out: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Nested JSON holding only the keys that were set.
    fn to_value(&self) -> Value {
        let mut root = Map::new();

        if let Some(mode) = self.mode {
            root.insert("build".into(), json!({ "mode": mode.as_str() }));
        }
        if let Some(fix) = self.eslint_fix {
            root.insert("eslint".into(), json!({ "fix": fix }));
        }
        if let Some(out) = &self.docs_out {
            root.insert("typedoc".into(), json!({ "out": out }));
        }

        Value::Object(root)
    }
}

impl TanukiConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI flags > environment variables > config file > defaults
    pub fn load(source: Option<&ConfigSource>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(source) = source {
            figment = match source {
                ConfigSource::PackageJson(path) => {
                    figment.merge(Serialized::defaults(load_package_field(path)?))
                }
                ConfigSource::Json(path) => figment.merge(Json::file(path)),
                ConfigSource::Yaml(path) => figment.merge(Yaml::file(path)),
                ConfigSource::Toml(path) => figment.merge(Toml::file(path)),
            };
        }

        // TANUKI_NAME, TANUKI_BUILD__MODE, TANUKI_ESLINT__FIX, ...
        figment = figment.merge(Env::prefixed("TANUKI_").split("__"));
        figment = figment.merge(Serialized::defaults(overrides.to_value()));

        figment.extract().map_err(|e| {
            ConfigError::Invalid {
                source_name: source
                    .map(|s| s.path().display().to_string())
                    .unwrap_or_else(|| "environment".to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Discovers the config file for `root` (or uses `explicit`) and loads it.
    pub fn discover(
        root: &Path,
        explicit: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<(Self, Option<ConfigSource>)> {
        let source = match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    root.join(path)
                };
                Some(ConfigSource::from_path(&path)?)
            }
            None => ConfigDiscovery::new(root).find(),
        };

        let config = Self::load(source.as_ref(), overrides)?;
        Ok((config, source))
    }
}
