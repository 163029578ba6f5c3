//! Logging setup for the Tanuki CLI.
//!
//! Every component logs under a `tanuki::*` target (`tanuki::docs`, `tanuki::ts`,
//! `tanuki::eslint`, ...). The filter is chosen from the global flags:
//!
//! 1. `--verbose`: debug for Tanuki targets
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`, when set
//! 4. otherwise info for Tanuki targets
//!
//! ```rust,no_run
//! use tanuki_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!(target: "tanuki::cli", "starting");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "tanuki=debug,tanuki_cli=debug,tanuki_docs=debug";
const QUIET_FILTER: &str = "tanuki=error,tanuki_cli=error,tanuki_docs=error";
const DEFAULT_FILTER: &str = "tanuki=info,tanuki_cli=info,tanuki_docs=info";

/// Builds the filter for the given verbosity flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
