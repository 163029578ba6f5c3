//! Source excerpts around a diagnostic position.
//!
//! ```text
//!  2 | const a = 1;
//!  3 | const b: number = "two";
//!    |       ^
//!  4 | export { a, b };
//! ```

use owo_colors::OwoColorize;

/// Frames `line`/`column` (both one-based) of `source`.
///
/// Shows up to two lines before and two after the target. Returns `None` when
/// the source is empty or the line is outside it.
pub fn frame_source(source: &str, line: usize, column: usize, colors: bool) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() || line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(3);
    let end = (line + 2).min(lines.len());
    let width = end.to_string().len();

    let mut framed = Vec::with_capacity(end - start + 1);
    for (index, text) in lines[start..end].iter().enumerate() {
        let number = start + 1 + index;
        let gutter = format!(" {:>width$} | ", number, width = width);
        framed.push(format!("{}{}", dim(&gutter, colors), text));

        if number == line {
            let blank_gutter: String = gutter
                .chars()
                .map(|c| if c.is_ascii_digit() { ' ' } else { c })
                .collect();
            let padding: String = text
                .chars()
                .take(column.saturating_sub(1))
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            let caret = if colors {
                "^".red().bold().to_string()
            } else {
                "^".to_string()
            };
            framed.push(format!("{}{}{}", dim(&blank_gutter, colors), padding, caret));
        }
    }

    Some(framed.join("\n"))
}

/// A framed excerpt followed by `> message`, or a placeholder when there is no source.
pub fn frame_message(
    source: Option<&str>,
    line: usize,
    column: usize,
    message: &str,
    fatal: bool,
    colors: bool,
) -> String {
    let marker = if colors {
        ">".red().to_string()
    } else {
        ">".to_string()
    };
    let suffix = if fatal { " (fatal)" } else { "" };

    match source.and_then(|source| frame_source(source, line, column, colors)) {
        Some(excerpt) => format!("{}\n\n{} {}{}", excerpt, marker, message, suffix),
        None => format!(
            "(unable to receive source trace)\n\n{} {}{}",
            marker, message, suffix
        ),
    }
}

fn dim(text: &str, colors: bool) -> String {
    if colors {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
