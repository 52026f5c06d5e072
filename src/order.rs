//! Case-insensitive order check for registry keys.
//!
//! Keys are compared after lowercasing. The sort is stable, so two keys that
//! only differ in case keep their declared relative order and the expected
//! sequence is deterministic.

use crate::error::Result;
use crate::models::{CheckResult, Misplaced, Status};
use crate::registry::AuthorRegistry;
use crate::utils::display_path;
use std::path::Path;

/// Load the registry at `registry_path` and check its key order.
///
/// `repo_root` only affects how the file name is displayed.
pub fn run_check(repo_root: &Path, registry_path: &Path) -> Result<CheckResult> {
    let registry = AuthorRegistry::load(registry_path)?;
    Ok(check_registry(
        &registry,
        &display_path(repo_root, registry.path()),
    ))
}

/// Check an already loaded registry.
pub fn check_registry(registry: &AuthorRegistry, file: &str) -> CheckResult {
    if registry.is_empty() {
        return CheckResult {
            file: file.to_string(),
            status: Status::Empty,
            current: Vec::new(),
            expected: Vec::new(),
            misplaced: Vec::new(),
        };
    }
    check_keys(registry.usernames(), file)
}

/// Compare `current` against its case-insensitively sorted permutation.
pub fn check_keys(current: Vec<String>, file: &str) -> CheckResult {
    let expected = expected_order(&current);
    let misplaced = misplaced(&current, &expected);
    let status = if current == expected {
        Status::Sorted
    } else {
        Status::Unsorted
    };
    CheckResult {
        file: file.to_string(),
        status,
        current,
        expected,
        misplaced,
    }
}

/// Keys sorted by their lowercase form, ties kept in input order.
pub fn expected_order(keys: &[String]) -> Vec<String> {
    let mut sorted = keys.to_vec();
    // sort_by_cached_key is stable
    sorted.sort_by_cached_key(|k| k.to_lowercase());
    sorted
}

/// Pairwise differences up to the shorter of the two sequences.
pub fn misplaced(current: &[String], expected: &[String]) -> Vec<Misplaced> {
    current
        .iter()
        .zip(expected.iter())
        .enumerate()
        .filter(|(_, (got, want))| got != want)
        .map(|(position, (got, want))| Misplaced {
            position,
            got: got.clone(),
            expected: want.clone(),
        })
        .collect()
}
