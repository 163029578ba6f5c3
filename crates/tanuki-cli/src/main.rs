//! Tanuki CLI entry point: parse arguments, set up logging, dispatch.

use clap::Parser;
use tanuki_cli::{cli, commands, error, logger, ui};

fn main() -> miette::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    commands::run(&args).map_err(error::miette::cli_error_to_miette)
}
