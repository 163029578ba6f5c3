use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::BuildModeArg;

/// Available Tanuki subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the project artifacts
    ///
    /// Applications are compiled with tsc. Libraries are bundled with esbuild
    /// into <outDir>/<name>.cjs, with optional .mjs wrapper and docs.json.
    Build(BuildArgs),

    /// Run ESLint in the current project
    ///
    /// Prints a warning/error summary followed by a source excerpt for every
    /// reported message.
    Lint(LintArgs),

    /// Generate docs.json from the project's typedoc reflection
    Docs(DocsArgs),
}

/// Arguments for the build command
#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// Build mode (app, library); falls back to build.mode in the config
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<BuildModeArg>,

    /// Emit CommonJS output
    ///
    /// Library builds always emit <name>.cjs; this flag is accepted for
    /// symmetry with --esm.
    #[arg(long, alias = "commonjs")]
    pub cjs: bool,

    /// Also emit an ES module wrapper (<name>.mjs), library mode only
    #[arg(long, alias = "esmodules")]
    pub esm: bool,

    /// Minify the bundled output, library mode only
    #[arg(short = 'm', long)]
    pub minify: bool,

    /// Generate docs.json after bundling, library mode only
    #[arg(short = 'd', long)]
    pub docs: bool,

    /// Only run the TypeScript compiler, whatever the mode
    #[arg(long, alias = "dev")]
    pub develop: bool,
}

/// Arguments for the lint command
#[derive(Args, Debug, Default, Clone)]
pub struct LintArgs {
    /// Files, directories or globs to lint
    #[arg(value_name = "FILES", default_value = ".")]
    pub files: Vec<String>,

    /// Apply ESLint fixes (defaults to eslint.fix in the config)
    #[arg(long, conflicts_with = "no_fix")]
    pub fix: bool,

    /// Report only, do not apply fixes
    #[arg(long)]
    pub no_fix: bool,
}

impl LintArgs {
    /// `Some` when the command line overrides the configured fix behaviour.
    pub fn fix_override(&self) -> Option<bool> {
        match (self.fix, self.no_fix) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the docs command
#[derive(Args, Debug, Default, Clone)]
pub struct DocsArgs {
    /// Read the reflection from an existing typedoc JSON file instead of running typedoc
    #[arg(long, value_name = "FILE")]
    pub reflection: Option<PathBuf>,

    /// Where to write docs.json (defaults to typedoc.out in the config)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}
