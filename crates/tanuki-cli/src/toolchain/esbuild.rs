use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::toolchain::shell::Shell;

/// A CommonJS bundle for Node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub entry: PathBuf,
    pub outfile: PathBuf,
    pub minify: bool,
}

impl BundleOptions {
    pub fn new(entry: impl Into<PathBuf>, outfile: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            outfile: outfile.into(),
            minify: false,
        }
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.entry.display().to_string(),
            "--bundle".to_string(),
            format!("--outfile={}", self.outfile.display()),
            "--format=cjs".to_string(),
            "--platform=node".to_string(),
            "--target=node14".to_string(),
        ];

        if self.minify {
            args.push("--minify".to_string());
        }

        args
    }
}

/// Bundles with the project's esbuild.
pub fn bundle(shell: &Shell, options: &BundleOptions) -> Result<PathBuf> {
    let esbuild = shell.resolve_node_tool("esbuild")?;
    let args = options.args();
    shell.exec(&esbuild, &args)?;

    debug!(target: "tanuki::ts", outfile = %options.outfile.display(), "bundle written");
    Ok(options.outfile.clone())
}

/// `<build_dir>/<name>.<extension>`
pub fn artifact_path(build_dir: &Path, name: &str, extension: &str) -> PathBuf {
    build_dir.join(format!("{}.{}", name, extension))
}
