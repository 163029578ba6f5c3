//! Tanuki CLI - build, lint and document TypeScript projects.
//!
//! The CLI drives the JavaScript toolchain (tsc, esbuild, ESLint, typedoc)
//! and turns typedoc reflections into docs.json through `tanuki-docs`.
//!
//! - [`cli`] - Argument definitions
//! - [`config`] - Config discovery and layered loading
//! - [`commands`] - `build`, `lint` and `docs`
//! - [`toolchain`] - External tool wrappers and the ESM wrapper generator
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - `tracing` setup
//! - [`ui`] - Terminal output and diagnostic source framing

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod toolchain;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt, ToolError};
