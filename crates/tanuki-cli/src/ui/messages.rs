//! Status lines on stderr.

use owo_colors::OwoColorize;

use super::colors_enabled;

fn print(symbol: &str, paint: impl Fn(&str) -> String, message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", paint(symbol), message);
    } else {
        eprintln!("{} {}", symbol, message);
    }
}

pub fn success(message: &str) {
    print("✓", |s| s.green().bold().to_string(), message);
}

pub fn info(message: &str) {
    print("ℹ", |s| s.blue().bold().to_string(), message);
}

pub fn warning(message: &str) {
    print("⚠", |s| s.yellow().bold().to_string(), message);
}

pub fn error(message: &str) {
    print("✗", |s| s.red().bold().to_string(), message);
}
