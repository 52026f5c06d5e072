//! Configuration discovery and effective settings resolution.
//!
//! The checker needs no configuration: run from anywhere inside a repository
//! it finds the root and checks `authors.yaml` there. An optional
//! `authors-sorted.toml|yaml|yml` at the root can point elsewhere.
//! Defaults:
//! - `registry`: `authors.yaml`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Registry file checked when nothing else is configured.
pub const DEFAULT_REGISTRY: &str = "authors.yaml";

const CONFIG_NAMES: [&str; 3] = [
    "authors-sorted.toml",
    "authors-sorted.yaml",
    "authors-sorted.yml",
];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `authors-sorted.toml|yaml`.
pub struct CheckerConfig {
    /// Registry path relative to the repository root.
    pub registry: Option<String>,
    /// Output mode: human|json
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub registry: PathBuf,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops at the first directory holding a config file, a `.git` entry, or
/// the default registry file. A relative `start` is resolved against the
/// current directory first so the walk can reach its real ancestors.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = absolute_start(start);
    let mut cur = start.as_path();
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists())
            || cur.join(".git").exists()
            || cur.join(DEFAULT_REGISTRY).exists()
        {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.clone(),
        }
    }
}

// `.` components are dropped: `Path::parent` on `/repo/.` yields `/`.
fn absolute_start(start: &Path) -> PathBuf {
    let joined = if start.is_absolute() {
        start.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(start),
            Err(_) => return start.to_path_buf(),
        }
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Path of the config file under `root`, if one exists.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load `CheckerConfig` if present and valid.
pub fn load_config(root: &Path) -> Option<CheckerConfig> {
    let path = find_config(root)?;
    let s = fs::read_to_string(&path).ok()?;
    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&s).ok()
    } else {
        serde_yaml::from_str(&s).ok()
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_registry: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let registry = cli_registry
        .map(|s| s.to_string())
        .or(cfg.registry)
        .unwrap_or_else(|| DEFAULT_REGISTRY.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .filter(|o| o == "json" || o == "human")
        .unwrap_or_else(|| "human".to_string());

    Effective {
        registry: repo_root.join(registry),
        repo_root,
        output,
    }
}
