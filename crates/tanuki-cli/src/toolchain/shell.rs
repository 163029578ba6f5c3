//! Running external executables.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::ToolError;

/// A resolved executable plus the arguments that must precede the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub prefix: Vec<String>,
    display: String,
}

impl Invocation {
    pub fn direct(program: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            program: program.into(),
            prefix: Vec::new(),
            display: name.to_string(),
        }
    }

    /// `npx <name>`
    pub fn npx(npx: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            program: npx.into(),
            prefix: vec![name.to_string()],
            display: name.to_string(),
        }
    }

    /// The command line as shown in messages: `name arg1 arg2`.
    pub fn command_line<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut line = self.display.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg.as_ref());
        }
        line
    }
}

/// Runs commands from a project directory.
#[derive(Debug, Clone)]
pub struct Shell {
    cwd: PathBuf,
}

impl Shell {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolves a node tool: the nearest `node_modules/.bin` first, then `npx`.
    pub fn resolve_node_tool(&self, name: &str) -> Result<Invocation, ToolError> {
        if let Some(local) = find_local_bin(&self.cwd, name) {
            debug!(target: "tanuki::shell", tool = name, path = %local.display(), "using local binary");
            return Ok(Invocation::direct(local, name));
        }

        match which::which("npx") {
            Ok(npx) => {
                debug!(target: "tanuki::shell", tool = name, "falling back to npx");
                Ok(Invocation::npx(npx, name))
            }
            Err(_) => Err(ToolError::NotFound {
                program: name.to_string(),
                hint: format!("Install it with `npm install -D {}`", name),
            }),
        }
    }

    /// Resolves an executable on `PATH`.
    pub fn resolve_system(&self, name: &str) -> Result<Invocation, ToolError> {
        which::which(name)
            .map(|path| Invocation::direct(path, name))
            .map_err(|_| ToolError::NotFound {
                program: name.to_string(),
                hint: format!("Make sure `{}` is installed and on your PATH", name),
            })
    }

    /// Runs the command and returns its output whatever the exit status.
    pub fn output<S: AsRef<str>>(
        &self,
        invocation: &Invocation,
        args: &[S],
    ) -> Result<Output, ToolError> {
        let command_line = invocation.command_line(args);
        debug!(target: "tanuki::shell", cwd = %self.cwd.display(), "$ {}", command_line);

        let mut argv: Vec<OsString> = invocation.prefix.iter().map(OsString::from).collect();
        argv.extend(args.iter().map(|arg| OsString::from(arg.as_ref())));

        Command::new(&invocation.program)
            .args(argv)
            .current_dir(&self.cwd)
            .output()
            .map_err(|error| ToolError::Spawn {
                command: command_line,
                error,
            })
    }

    /// Runs the command and fails on a non-zero exit.
    pub fn exec<S: AsRef<str>>(
        &self,
        invocation: &Invocation,
        args: &[S],
    ) -> Result<Output, ToolError> {
        let output = self.output(invocation, args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(ToolError::Failed {
                command: invocation.command_line(args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            })
        }
    }
}

/// Looks for `node_modules/.bin/<name>` in `start` and its ancestors.
pub fn find_local_bin(start: &Path, name: &str) -> Option<PathBuf> {
    let file_name = if cfg!(windows) {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    };

    start
        .ancestors()
        .map(|dir| dir.join("node_modules").join(".bin").join(&file_name))
        .find(|candidate| candidate.is_file())
}
