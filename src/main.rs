//! authors-sorted binary entry point.
//! Resolves configuration, runs the order check, and prints the result.

use authors_sorted::cli::Cli;
use authors_sorted::{config, order, output, utils};
use clap::Parser;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.registry.as_deref(),
        cli.output.as_deref(),
    );
    // A config file that fails to parse falls back to defaults
    if let Some(path) = config::find_config(&eff.repo_root) {
        if config::load_config(&eff.repo_root).is_none() {
            eprintln!(
                "{} ignoring invalid {}; using defaults.",
                utils::note_prefix(),
                utils::display_path(&eff.repo_root, &path)
            );
        }
    }
    match order::run_check(&eff.repo_root, &eff.registry) {
        Ok(result) => {
            output::print_result(&result, &eff.output);
            if let Err(e) = std::io::stdout().flush() {
                eprintln!("{} failed to write report: {}", utils::error_prefix(), e);
                std::process::exit(2);
            }
            std::process::exit(result.exit_code());
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
