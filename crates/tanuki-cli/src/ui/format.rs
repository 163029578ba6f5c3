//! Sizes, durations and the artifact listing printed after a library build.

use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::Duration;

/// Format file size in human-readable format.
///
/// ```
/// use tanuki_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Format duration in human-readable format ("50ms", "1.50s", "1m 30s").
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Lists written artifacts with their sizes, then the elapsed time.
pub fn print_artifacts(artifacts: &[(PathBuf, u64)], elapsed: Duration) {
    for (path, size) in artifacts {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if super::colors_enabled() {
            eprintln!("  {} {} {}", "▸".blue(), name.bold(), format_size(*size).dimmed());
        } else {
            eprintln!("  - {} {}", name, format_size(*size));
        }
    }

    eprintln!("  done in {}", format_duration(elapsed));
}
