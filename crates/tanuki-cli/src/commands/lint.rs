//! `tanuki lint`: ESLint with a summary line and framed messages.

use tracing::debug;

use crate::cli::LintArgs;
use crate::config::Project;
use crate::error::{CliError, Result};
use crate::toolchain::{Eslint, LintResult, LintSummary, Shell};
use crate::ui;

pub fn execute(args: &LintArgs, project: &Project) -> Result<()> {
    let shell = Shell::new(&project.root);
    let eslint = Eslint::new(
        &shell,
        project.config.eslint.fix,
        &project.config.eslint.extensions,
    );

    debug!(target: "tanuki::eslint", files = ?args.files, fix = project.config.eslint.fix, "linting");
    let results = eslint.lint(&args.files)?;

    let (summary, blocks) = render_report(&results, ui::colors_enabled());
    if summary.errors > 0 || summary.warnings > 0 {
        ui::warning(&summary.line());
    } else {
        ui::success(&summary.line());
    }
    for block in blocks {
        eprintln!("{}\n", block);
    }

    if summary.errors > 0 {
        return Err(CliError::LintFailed {
            errors: summary.errors,
        });
    }

    Ok(())
}

/// Totals plus one framed block per message, in report order.
pub fn render_report(results: &[LintResult], colors: bool) -> (LintSummary, Vec<String>) {
    let summary = LintSummary::from_results(results);

    let blocks = results
        .iter()
        .flat_map(|result| {
            result.messages.iter().map(move |message| {
                let header = match &message.rule_id {
                    Some(rule) => format!("{}:{}:{} ({})", result.file_path, message.line, message.column, rule),
                    None => format!("{}:{}:{}", result.file_path, message.line, message.column),
                };
                let framed = ui::frame_message(
                    result.text(),
                    message.line,
                    message.column,
                    &message.message,
                    message.fatal,
                    colors,
                );
                format!("{}\n{}", header, framed)
            })
        })
        .collect();

    (summary, blocks)
}
