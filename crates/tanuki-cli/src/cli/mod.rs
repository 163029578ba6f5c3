//! Command-line interface definition for Tanuki.
//!
//! # Command Structure
//!
//! - `tanuki build` - Build application or library artifacts
//! - `tanuki lint` - Run ESLint with framed diagnostics
//! - `tanuki docs` - Serialize the project reflection to docs.json

mod commands;
pub mod enums;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{BuildArgs, Command, DocsArgs, LintArgs};
pub use enums::*;

/// Tanuki - build, lint and document TypeScript projects
#[derive(Parser, Debug)]
#[command(
    name = "tanuki",
    version,
    about = "Build, lint and document TypeScript projects",
    long_about = "Tanuki wraps tsc, esbuild, ESLint and typedoc behind one command line.\n\
                  It reads its settings from package.json (\"tanuki\" field), .tanukirc files\n\
                  or tanuki.toml, and writes API documentation as docs.json."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of searching the project root
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
