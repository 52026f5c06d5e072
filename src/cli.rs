//! CLI argument parsing via `clap`.
//!
//! Every flag is optional; a bare invocation checks `authors.yaml` at the
//! detected repository root.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "authors-sorted",
    version,
    about = "Check that authors.yaml keys are sorted alphabetically (case-insensitive)",
    long_about = "Check that the top-level keys of authors.yaml are in case-insensitive alphabetical order.\n\nExits 0 when the registry is empty or sorted, 1 when entries are out of place, and 2 when the file cannot be read or parsed.\n\nConfiguration precedence: CLI > authors-sorted.toml > defaults.",
    after_help = "Examples:\n  authors-sorted\n  authors-sorted --registry meta/authors.yaml\n  authors-sorted --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Repository root (default: detected from current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Registry file relative to the root (default: authors.yaml)")]
    pub registry: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
