//! TypeScript compiler integration: tsconfig lookup, `--showConfig` and diagnostics.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::error::{BuildError, Result, ToolError};
use crate::toolchain::shell::Shell;

pub const TSCONFIG_FILE: &str = "tsconfig.json";

static DIAGNOSTIC_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<file>.+?)\((?P<line>\d+),(?P<column>\d+)\): )?(?P<severity>error|warning|message) TS(?P<code>\d+): (?P<message>.*)$").ok()
});

/// Locates the tsconfig to use: the configured one, else the nearest
/// `tsconfig.json` from `root` upwards.
pub fn find_tsconfig(root: &Path, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(configured) = configured {
        let path = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            root.join(configured)
        };

        if !path.is_file() {
            return Err(BuildError::TsconfigNotFound(path).into());
        }
        debug!(target: "tanuki::ts", "Found config file in {}.", path.display());
        return Ok(path);
    }

    root.ancestors()
        .map(|dir| dir.join(TSCONFIG_FILE))
        .find(|candidate| candidate.is_file())
        .inspect(|path| debug!(target: "tanuki::ts", "Found config file in {}.", path.display()))
        .ok_or_else(|| BuildError::TsconfigNotFound(root.to_path_buf()).into())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShowConfig {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    out_dir: Option<PathBuf>,
    #[serde(default)]
    no_emit: bool,
}

/// The parts of a resolved tsconfig the build needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsconfigOptions {
    pub path: PathBuf,
    /// `compilerOptions.outDir`, relative to the tsconfig directory
    pub out_dir: Option<PathBuf>,
    pub no_emit: bool,
}

impl TsconfigOptions {
    /// Parses the JSON printed by `tsc -p <file> --showConfig`.
    pub fn parse(path: &Path, json: &str) -> Result<Self> {
        let parsed: ShowConfig =
            serde_json::from_str(json).map_err(|e| BuildError::TsconfigInvalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            out_dir: parsed.compiler_options.out_dir,
            no_emit: parsed.compiler_options.no_emit,
        })
    }

    /// Absolute output directory; `build` under `root` when `outDir` is unset.
    pub fn build_dir(&self, root: &Path) -> PathBuf {
        match &self.out_dir {
            Some(out_dir) if out_dir.is_absolute() => out_dir.clone(),
            Some(out_dir) => self
                .path
                .parent()
                .unwrap_or(root)
                .join(out_dir),
            None => root.join(crate::config::default_build_dir()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Message,
}

/// A compiler diagnostic from `tsc --pretty false` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<PathBuf>,
    /// One-based line and column
    pub line: usize,
    pub column: usize,
    pub severity: Severity,
    pub code: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `file:line:col`, or `TSxxxx` for diagnostics without a file.
    pub fn location(&self) -> String {
        match &self.file {
            Some(file) => format!("{}:{}:{}", file.display(), self.line, self.column),
            None => format!("TS{}", self.code),
        }
    }
}

/// Parses compiler output. Indented continuation lines join the previous message.
pub fn parse_diagnostics(output: &str) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let Some(pattern) = DIAGNOSTIC_RE.as_ref() else {
        return diagnostics;
    };

    for line in output.lines() {
        if let Some(caps) = pattern.captures(line) {
            let severity = match &caps["severity"] {
                "error" => Severity::Error,
                "warning" => Severity::Warning,
                _ => Severity::Message,
            };

            diagnostics.push(Diagnostic {
                file: caps.name("file").map(|m| PathBuf::from(m.as_str())),
                line: caps
                    .name("line")
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(0),
                column: caps
                    .name("column")
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(0),
                severity,
                code: caps["code"].parse().unwrap_or(0),
                message: caps["message"].to_string(),
            });
        } else if line.starts_with(' ') && !line.trim().is_empty() {
            if let Some(last) = diagnostics.last_mut() {
                last.message.push('\n');
                last.message.push_str(line.trim());
            }
        }
    }

    diagnostics
}

/// The `tsc` executable of a project.
pub struct TypeScript<'a> {
    shell: &'a Shell,
}

impl<'a> TypeScript<'a> {
    pub fn new(shell: &'a Shell) -> Self {
        Self { shell }
    }

    /// Reads the resolved configuration through `tsc --showConfig`.
    pub fn show_config(&self, tsconfig: &Path) -> Result<TsconfigOptions> {
        let tsc = self.shell.resolve_node_tool("tsc")?;
        let args = [
            "-p".to_string(),
            tsconfig.display().to_string(),
            "--showConfig".to_string(),
        ];
        let output = self.shell.exec(&tsc, &args)?;
        TsconfigOptions::parse(tsconfig, &String::from_utf8_lossy(&output.stdout))
    }

    /// Compiles the project; diagnostics are returned, not raised.
    pub fn compile(&self, tsconfig: &Path) -> Result<Vec<Diagnostic>> {
        let tsc = self.shell.resolve_node_tool("tsc")?;
        let args = [
            "-p".to_string(),
            tsconfig.display().to_string(),
            "--pretty".to_string(),
            "false".to_string(),
        ];
        let output = self.shell.output(&tsc, &args)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let diagnostics = parse_diagnostics(&stdout);

        if !output.status.success() && diagnostics.is_empty() {
            return Err(ToolError::Failed {
                command: tsc.command_line(&args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }
            .into());
        }

        Ok(diagnostics)
    }
}
