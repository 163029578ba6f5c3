//! ESLint runner and its JSON report.

use serde::Deserialize;

use crate::error::{Result, ToolError};
use crate::toolchain::shell::Shell;

/// One file of `eslint --format json` output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<LintMessage>,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub warning_count: usize,
    /// Fixed source, present when `--fix` changed the file
    pub output: Option<String>,
    pub source: Option<String>,
}

impl LintResult {
    /// Source text to frame messages against.
    pub fn text(&self) -> Option<&str> {
        self.output
            .as_deref()
            .or(self.source.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    pub rule_id: Option<String>,
    /// 1 = warning, 2 = error
    #[serde(default)]
    pub severity: u8,
    pub message: String,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
    #[serde(default)]
    pub fatal: bool,
}

impl LintMessage {
    pub fn is_error(&self) -> bool {
        self.fatal || self.severity >= 2
    }
}

/// Totals over a lint run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    pub warnings: usize,
    pub errors: usize,
}

impl LintSummary {
    pub fn from_results(results: &[LintResult]) -> Self {
        results.iter().fold(Self::default(), |acc, result| Self {
            warnings: acc.warnings + result.warning_count,
            errors: acc.errors + result.error_count,
        })
    }

    pub fn line(&self) -> String {
        format!(
            "⚠️ {} warning(s) | ✖️ {} error(s)",
            self.warnings, self.errors
        )
    }
}

/// Parses `eslint --format json` output.
pub fn parse_report(json: &str) -> std::result::Result<Vec<LintResult>, serde_json::Error> {
    serde_json::from_str(json)
}

pub struct Eslint<'a> {
    shell: &'a Shell,
    fix: bool,
    extensions: &'a [String],
}

impl<'a> Eslint<'a> {
    pub fn new(shell: &'a Shell, fix: bool, extensions: &'a [String]) -> Self {
        Self {
            shell,
            fix,
            extensions,
        }
    }

    pub fn args(&self, files: &[String]) -> Vec<String> {
        let mut args = vec!["--format".to_string(), "json".to_string()];
        if !self.extensions.is_empty() {
            args.push("--ext".to_string());
            args.push(self.extensions.join(","));
        }
        if self.fix {
            args.push("--fix".to_string());
        }
        args.extend(files.iter().cloned());
        args
    }

    /// Lints `files`; lint findings are data, only a crashed run is an error.
    pub fn lint(&self, files: &[String]) -> Result<Vec<LintResult>> {
        let eslint = self.shell.resolve_node_tool("eslint")?;
        let args = self.args(files);
        let output = self.shell.output(&eslint, &args)?;

        // Exit code 1 means lint errors were found; anything else but 0 is a crash.
        let code = output.status.code();
        if code != Some(0) && code != Some(1) {
            return Err(ToolError::Failed {
                command: eslint.command_line(&args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }
            .into());
        }

        parse_report(&String::from_utf8_lossy(&output.stdout)).map_err(|e| {
            ToolError::InvalidOutput {
                command: eslint.command_line(&args),
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"[
        {
            "filePath": "/work/src/index.ts",
            "messages": [
                { "ruleId": "no-unused-vars", "severity": 1, "message": "'a' is unused.", "line": 2, "column": 7 },
                { "ruleId": null, "severity": 2, "message": "Parsing error", "line": 4, "column": 1, "fatal": true }
            ],
            "errorCount": 1,
            "fatalErrorCount": 1,
            "warningCount": 1,
            "source": "const x = 1;\nconst a = 2;\n"
        },
        {
            "filePath": "/work/src/util.ts",
            "messages": [],
            "errorCount": 0,
            "warningCount": 2
        }
    ]"#;

    #[test]
    fn test_parse_report() {
        let results = parse_report(REPORT).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].messages.len(), 2);
        assert_eq!(results[0].messages[0].rule_id.as_deref(), Some("no-unused-vars"));
        assert!(!results[0].messages[0].is_error());
        assert!(results[0].messages[1].is_error());
        assert_eq!(results[0].text(), Some("const x = 1;\nconst a = 2;\n"));
        assert_eq!(results[1].text(), None);
    }

    #[test]
    fn test_summary_counts_errors_separately() {
        let summary = LintSummary::from_results(&parse_report(REPORT).unwrap());
        assert_eq!(summary, LintSummary { warnings: 3, errors: 1 });
        assert_eq!(summary.line(), "⚠️ 3 warning(s) | ✖️ 1 error(s)");
    }

    #[test]
    fn test_fixed_output_preferred() {
        let result = LintResult {
            output: Some("fixed".to_string()),
            source: Some("original".to_string()),
            ..Default::default()
        };
        assert_eq!(result.text(), Some("fixed"));
    }

    #[test]
    fn test_args() {
        let shell = Shell::new(".");
        let extensions = vec![".ts".to_string(), ".tsx".to_string()];
        let eslint = Eslint::new(&shell, true, &extensions);
        assert_eq!(
            eslint.args(&[".".to_string()]),
            vec!["--format", "json", "--ext", ".ts,.tsx", "--fix", "."]
        );

        let eslint = Eslint::new(&shell, false, &[]);
        assert_eq!(eslint.args(&["src".to_string()]), vec!["--format", "json", "src"]);
    }
}
