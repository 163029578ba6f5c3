//! Config file discovery.
//!
//! Searches the project root for, in order:
//! 1. `package.json` with a `"tanuki"` field
//! 2. `.tanukirc` (JSON or YAML)
//! 3. `.tanukirc.ts` / `.tanukirc.js` (skipped with a warning)
//! 4. `.tanukirc.json`
//! 5. `.tanukirc.yaml` / `.tanukirc.yml`
//! 6. `tanuki.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

/// Field of package.json holding the configuration.
pub const PACKAGE_FIELD: &str = "tanuki";

const SEARCH_PLACES: &[&str] = &[
    "package.json",
    ".tanukirc",
    ".tanukirc.ts",
    ".tanukirc.js",
    ".tanukirc.json",
    ".tanukirc.yaml",
    ".tanukirc.yml",
    "tanuki.toml",
];

/// A config file together with the format used to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    PackageJson(PathBuf),
    Json(PathBuf),
    Yaml(PathBuf),
    Toml(PathBuf),
}

impl ConfigSource {
    /// Picks the format of an explicitly given file.
    pub fn from_path(path: &Path) -> std::result::Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        let source = match (file_name, extension) {
            ("package.json", _) => ConfigSource::PackageJson(path.to_path_buf()),
            (_, "json") => ConfigSource::Json(path.to_path_buf()),
            (_, "yaml" | "yml") => ConfigSource::Yaml(path.to_path_buf()),
            (_, "toml") => ConfigSource::Toml(path.to_path_buf()),
            (_, "ts" | "js" | "cjs" | "mjs") => {
                return Err(ConfigError::Unsupported(path.to_path_buf()))
            }
            // Extensionless rc files may hold JSON or YAML; YAML reads both.
            _ => ConfigSource::Yaml(path.to_path_buf()),
        };

        Ok(source)
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::PackageJson(path)
            | ConfigSource::Json(path)
            | ConfigSource::Yaml(path)
            | ConfigSource::Toml(path) => path,
        }
    }
}

/// File-based configuration discovery rooted at a project directory.
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Finds the first usable config file, or `None`.
    pub fn find(&self) -> Option<ConfigSource> {
        for place in SEARCH_PLACES {
            let path = self.root.join(place);
            if !path.is_file() {
                continue;
            }

            if *place == "package.json" {
                if package_field(&path).is_some() {
                    debug!(target: "tanuki::config", path = %path.display(), "using package.json field");
                    return Some(ConfigSource::PackageJson(path));
                }
                continue;
            }

            match ConfigSource::from_path(&path) {
                Ok(source) => {
                    debug!(target: "tanuki::config", path = %path.display(), "found config file");
                    return Some(source);
                }
                Err(_) => warn!(
                    target: "tanuki::config",
                    "Skipping {}: script config files cannot be evaluated",
                    path.display()
                ),
            }
        }

        None
    }
}

/// The `"tanuki"` object of a package.json, if present and not null.
pub fn package_field(path: &Path) -> Option<Value> {
    let content = fs::read_to_string(path).ok()?;
    let parsed: Value = serde_json::from_str(&content).ok()?;
    parsed.get(PACKAGE_FIELD).filter(|value| !value.is_null()).cloned()
}

/// Reads the `"tanuki"` field of a package.json, failing when it is missing.
pub fn load_package_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;

    match parsed.get(PACKAGE_FIELD) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(ConfigError::MissingField {
            field: PACKAGE_FIELD.to_string(),
            hint: "Add a 'tanuki' field to your package.json".to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn package_json_without_field_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "demo" }"#).unwrap();
        fs::write(dir.path().join("tanuki.toml"), "name = \"demo\"\n").unwrap();

        assert_eq!(
            ConfigDiscovery::new(dir.path()).find(),
            Some(ConfigSource::Toml(dir.path().join("tanuki.toml")))
        );
    }

    #[test]
    fn package_json_field_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "demo", "tanuki": { "name": "demo" } }"#,
        )
        .unwrap();
        fs::write(dir.path().join(".tanukirc.json"), r#"{ "name": "other" }"#).unwrap();

        assert_eq!(
            ConfigDiscovery::new(dir.path()).find(),
            Some(ConfigSource::PackageJson(dir.path().join("package.json")))
        );
    }

    #[test]
    fn script_configs_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".tanukirc.ts"), "export default {}").unwrap();
        fs::write(dir.path().join(".tanukirc.yml"), "name: demo\n").unwrap();

        assert_eq!(
            ConfigDiscovery::new(dir.path()).find(),
            Some(ConfigSource::Yaml(dir.path().join(".tanukirc.yml")))
        );
    }

    #[test]
    fn extensionless_rc_reads_as_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".tanukirc"), r#"{ "name": "demo" }"#).unwrap();

        assert_eq!(
            ConfigDiscovery::new(dir.path()).find(),
            Some(ConfigSource::Yaml(dir.path().join(".tanukirc")))
        );
    }

    #[test]
    fn explicit_script_config_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tanuki.config.js");
        fs::write(&path, "module.exports = {}").unwrap();

        assert!(matches!(
            ConfigSource::from_path(&path),
            Err(ConfigError::Unsupported(_))
        ));
        assert!(matches!(
            ConfigSource::from_path(&dir.path().join("missing.json")),
            Err(ConfigError::NotFound(_))
        ));
    }
}
