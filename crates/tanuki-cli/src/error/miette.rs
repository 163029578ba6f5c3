//! Miette diagnostic conversion for CLI errors.

use crate::error::{BuildError, CliError, ToolError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Tool(e) => tool_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Docs(e) if e.is_structural() => {
            miette::miette!("Documentation was not generated: {}", e)
        }
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::Diagnostics { count } => miette::miette!(
            "TypeScript reported {} error(s)\n\nHint: The diagnostics above point at the offending source",
            count
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ToolError to miette Report
pub fn tool_error_to_miette(err: ToolError) -> Report {
    match err {
        ToolError::Failed { command, stderr, .. } if stderr.trim().is_empty() => {
            miette::miette!("\"{}\" exited unsuccessfully", command)
        }
        ToolError::Failed {
            command, stderr, ..
        } => miette::miette!("\"{}\" exited unsuccessfully:\n{}", command, stderr.trim_end()),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanuki_docs::DocsError;

    #[test]
    fn structural_docs_errors_are_labelled() {
        let report = cli_error_to_miette(CliError::Docs(DocsError::WorkspacesUnsupported));
        assert!(report.to_string().starts_with("Documentation was not generated"));
    }

    #[test]
    fn tool_errors_keep_their_message() {
        let report = tool_error_to_miette(ToolError::NotFound {
            program: "tsc".to_string(),
            hint: "npm install -D typescript".to_string(),
        });
        assert!(report.to_string().contains("Unable to find `tsc`"));
    }
}
