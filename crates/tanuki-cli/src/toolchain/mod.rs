//! Wrappers around the external JavaScript toolchain.
//!
//! Every tool runs through [`Shell`], which prefers the project's
//! `node_modules/.bin` and falls back to `npx`.

pub mod esbuild;
pub mod eslint;
pub mod esm;
pub mod shell;
pub mod typedoc;
pub mod typescript;

pub use eslint::{Eslint, LintResult, LintSummary};
pub use shell::{Invocation, Shell};
pub use typedoc::TypedocSource;
pub use typescript::{Diagnostic, TsconfigOptions, TypeScript};
