use crate::config::{BuildMode, TanukiConfig};
use crate::error::{ConfigError, Result};
use tracing::warn;

impl TanukiConfig {
    /// Validate configuration for logical consistency.
    ///
    /// Options that have no effect in the selected build mode only warn.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "name".to_string(),
                value: String::new(),
                hint: "The project name names library artifacts and cannot be empty".to_string(),
            }
            .into());
        }

        if self.eslint.extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "eslint.extensions".to_string(),
                hint: "List at least one extension, e.g. [\".ts\"]".to_string(),
            }
            .into());
        }

        if self.typedoc.entry_points.is_empty() {
            return Err(ConfigError::MissingField {
                field: "typedoc.entryPoints".to_string(),
                hint: "Provide at least one entry point".to_string(),
            }
            .into());
        }

        if self.build.mode == BuildMode::App {
            for (field, set) in [
                ("build.esm", self.build.esm),
                ("build.minify", self.build.minify),
                ("build.provideDocs", self.build.provide_docs),
            ] {
                if set {
                    warn!(
                        target: "tanuki::config",
                        "{} is ignored when building in application mode", field
                    );
                }
            }
        }

        Ok(())
    }
}
