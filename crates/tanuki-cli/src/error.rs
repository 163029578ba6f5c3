//! Error handling for the Tanuki CLI.
//!
//! `CliError` is the top-level type returned by every command. The domain enums
//! (`ConfigError`, `BuildError`, `ToolError`) carry the detail and convert into it
//! through `#[from]`, as does [`tanuki_docs::DocsError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use tanuki_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_manifest(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
//! }
//! ```

pub mod miette;

use std::path::PathBuf;
use std::process::ExitStatus;

use tanuki_docs::DocsError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration discovery, loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build pipeline failures
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// An external tool could not be run or exited unsuccessfully
    #[error("{0}")]
    Tool(#[from] ToolError),

    /// Documentation serialization failed
    #[error("Documentation error: {0}")]
    Docs(#[from] DocsError),

    /// Lint run finished with error-severity messages
    #[error("Lint failed with {errors} error(s)")]
    LintFailed {
        /// Number of error-severity messages
        errors: usize,
    },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding errors from tool output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}\n\nHint: Create a .tanukirc.json file or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// The config file could not be parsed or merged
    #[error("Invalid configuration in {source_name}: {message}\n\nHint: Check the file syntax and field types")]
    Invalid {
        /// File (or layer) the failure came from
        source_name: String,
        /// Parser message
        message: String,
    },

    /// Config files that need a JavaScript runtime to evaluate
    #[error("Config file {} cannot be evaluated\n\nHint: Move the configuration to .tanukirc.json or the \"tanuki\" field of package.json", .0.display())]
    Unsupported(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Build pipeline errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No tsconfig.json was found
    #[error("Unable to locate `tsconfig.json` from {}\n\nHint: Set the 'tsconfig' field in your Tanuki config", .0.display())]
    TsconfigNotFound(PathBuf),

    /// `tsc --showConfig` output could not be understood
    #[error("Unable to parse `{}`: {message}", .path.display())]
    TsconfigInvalid {
        /// tsconfig that was read
        path: PathBuf,
        /// Reason
        message: String,
    },

    /// Library entry point is missing
    #[error("Entry point not found: {}\n\nHint: Library builds bundle src/index.ts", .0.display())]
    EntryNotFound(PathBuf),

    /// The TypeScript compiler reported error diagnostics
    #[error("TypeScript reported {count} error(s)")]
    Diagnostics {
        /// Number of error diagnostics
        count: usize,
    },

    /// Failed to write an output artifact
    #[error("Failed to write artifact {}: {error}\n\nHint: Check output directory permissions", .path.display())]
    ArtifactWriteFailed {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        error: std::io::Error,
    },

    /// The ESM wrapper could not be generated
    #[error("Unable to generate ESM wrapper for {}: {message}", .path.display())]
    EsmWrapper {
        /// CommonJS bundle that was inspected
        path: PathBuf,
        /// Reason
        message: String,
    },
}

/// External tool failures.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The executable could not be found
    #[error("Unable to find `{program}`\n\nHint: {hint}")]
    NotFound {
        /// Program name
        program: String,
        /// How to install it
        hint: String,
    },

    /// The executable could not be spawned
    #[error("Unable to run \"{command}\": {error}")]
    Spawn {
        /// Full command line
        command: String,
        /// Underlying I/O error
        #[source]
        error: std::io::Error,
    },

    /// The tool exited unsuccessfully
    #[error("Unable to run \"{command}\" ({status}): {stderr}")]
    Failed {
        /// Full command line
        command: String,
        /// Exit status
        status: ExitStatus,
        /// Captured stderr
        stderr: String,
    },

    /// The tool produced output we could not decode
    #[error("Unexpected output from \"{command}\": {message}")]
    InvalidOutput {
        /// Full command line
        command: String,
        /// Reason
        message: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefixes the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from(".tanukirc.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains(".tanukirc.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_build_error_tsconfig_not_found() {
        let err = BuildError::TsconfigNotFound(PathBuf::from("/work/app"));
        let msg = err.to_string();
        assert!(msg.contains("tsconfig.json"));
        assert!(msg.contains("/work/app"));
    }

    #[test]
    fn test_tool_error_not_found() {
        let err = ToolError::NotFound {
            program: "esbuild".to_string(),
            hint: "npm install -D esbuild".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to find `esbuild`\n\nHint: npm install -D esbuild"
        );
    }

    #[test]
    fn test_cli_error_from_docs_error() {
        let cli_err: CliError = DocsError::WorkspacesUnsupported.into();
        assert!(matches!(cli_err, CliError::Docs(DocsError::WorkspacesUnsupported)));
    }

    #[test]
    fn test_cli_error_from_build_error() {
        let cli_err: CliError = BuildError::Diagnostics { count: 2 }.into();
        assert!(matches!(cli_err, CliError::Build(_)));
        assert!(cli_err.to_string().contains("2 error(s)"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.context("Failed to clean build").unwrap_err();
        assert!(matches!(err, CliError::Custom(_)));
        assert_eq!(err.to_string(), "Failed to clean build: I/O error: denied");
    }

    #[test]
    fn test_result_ext_context_keeps_domain_message() {
        let result: std::result::Result<(), BuildError> =
            Err(BuildError::Diagnostics { count: 1 });

        let err = result.context("Failed to compile").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to compile: Build error: TypeScript reported 1 error(s)"
        );
    }
}
