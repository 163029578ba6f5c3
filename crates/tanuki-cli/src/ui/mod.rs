//! Terminal output: status lines, spinners, artifact summaries and source frames.
//!
//! Colors are decided once by [`init_colors`] and read back with
//! [`colors_enabled`]. Everything here writes to stderr so that stdout stays
//! free for machine-readable output.

mod format;
mod frame;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, print_artifacts};
pub use frame::{frame_message, frame_source};
pub use messages::{error, info, success, warning};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Whether the environment allows colors: `NO_COLOR` wins over `FORCE_COLOR`,
/// otherwise stderr must be attended.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decides color output for the process. `--no-color` always disables it.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
