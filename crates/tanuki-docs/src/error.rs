use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for reflection loading and docs.json generation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The reflection collaborator did not produce a project tree.
    #[error("unable to retrieve the project reflection: {reason}")]
    NoReflection {
        /// Why no tree was produced (tool failure, missing output, ...).
        reason: String,
    },

    /// Multi-project (`workspaces: true`) output was requested.
    #[error("workspaces are not supported at this given moment")]
    WorkspacesUnsupported,

    /// Failed to read, write, or create a path.
    #[error("i/o failure on '{path}': {error}")]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Reflection input could not be decoded, or the document could not be encoded.
    #[error("invalid json in '{path}': {error}")]
    Json {
        /// Path of the document being read or written.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        error: serde_json::Error,
    },
}

impl DocsError {
    /// Helper to build a [`DocsError::NoReflection`] from any displayable reason.
    pub fn no_reflection(reason: impl std::fmt::Display) -> Self {
        Self::NoReflection {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }

    /// `true` for structural failures (no tree, workspace mode), `false` for I/O and
    /// encoding failures.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::NoReflection { .. } | Self::WorkspacesUnsupported)
    }
}
