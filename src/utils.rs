//! Supporting helpers: stderr prefixes and path display.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;

fn stderr_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// `error:` prefix for fatal diagnostics.
pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// `note:` prefix for non-fatal diagnostics.
pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render `path` relative to `root` when it lives underneath it.
pub fn display_path(root: &Path, path: &Path) -> String {
    match pathdiff::diff_paths(path, root) {
        Some(rel) if !rel.starts_with("..") && !rel.as_os_str().is_empty() => {
            rel.to_string_lossy().to_string()
        }
        _ => path.to_string_lossy().to_string(),
    }
}
