//! Command implementations for the Tanuki CLI.
//!
//! - [`build`] - Compile with tsc or bundle a library with esbuild
//! - [`lint`] - ESLint with framed diagnostics
//! - [`docs`] - Serialize the typedoc reflection to docs.json
//!
//! Each command takes its parsed arguments and the loaded [`Project`].

pub mod build;
pub mod docs;
pub mod lint;
pub(crate) mod utils;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::{BuildMode, ConfigOverrides, Project};
use crate::error::Result;

pub use build::execute as build_execute;
pub use docs::execute as docs_execute;
pub use lint::execute as lint_execute;

/// Configuration values set by the command's flags.
pub fn overrides_for(command: &Command) -> ConfigOverrides {
    match command {
        Command::Build(args) => ConfigOverrides {
            mode: args.mode.map(BuildMode::from),
            ..Default::default()
        },
        Command::Lint(args) => ConfigOverrides {
            eslint_fix: args.fix_override(),
            ..Default::default()
        },
        Command::Docs(args) => ConfigOverrides {
            docs_out: args.out.clone(),
            ..Default::default()
        },
    }
}

/// Loads the project for `cli` and runs its command.
pub fn run(cli: &Cli) -> Result<()> {
    let root = match &cli.cwd {
        Some(cwd) => utils::resolve_path(cwd, &utils::get_cwd()?),
        None => utils::get_cwd()?,
    };

    let project = Project::load(&root, cli.config.as_deref(), &overrides_for(&cli.command))?;
    debug!(
        target: "tanuki::cli",
        root = %project.root.display(),
        config = ?project.config_file,
        "project loaded"
    );

    match &cli.command {
        Command::Build(args) => build_execute(args, &project),
        Command::Lint(args) => lint_execute(args, &project),
        Command::Docs(args) => docs_execute(args, &project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_only_carry_set_flags() {
        let cli = Cli::try_parse_from(["tanuki", "build", "--mode", "lib"]).unwrap();
        assert_eq!(
            overrides_for(&cli.command),
            ConfigOverrides {
                mode: Some(BuildMode::Library),
                ..Default::default()
            }
        );

        let cli = Cli::try_parse_from(["tanuki", "lint"]).unwrap();
        assert_eq!(overrides_for(&cli.command), ConfigOverrides::default());

        let cli = Cli::try_parse_from(["tanuki", "docs", "-o", "api.json"]).unwrap();
        assert_eq!(
            overrides_for(&cli.command).docs_out,
            Some(PathBuf::from("api.json"))
        );
    }
}
