//! Shared data models for check results consumed by the printers.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Terminal outcome of a registry check.
pub enum Status {
    /// No entries; vacuously sorted.
    Empty,
    Sorted,
    Unsorted,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A position where the declared key differs from the expected one.
pub struct Misplaced {
    pub position: usize,
    pub got: String,
    pub expected: String,
}

#[derive(Serialize, Debug, Clone)]
/// Check result container.
pub struct CheckResult {
    /// Registry path as shown to the user.
    pub file: String,
    pub status: Status,
    pub current: Vec<String>,
    pub expected: Vec<String>,
    pub misplaced: Vec<Misplaced>,
}

impl CheckResult {
    /// Process exit code for this outcome: 1 when disorder was found.
    pub fn exit_code(&self) -> i32 {
        match self.status {
            Status::Unsorted => 1,
            Status::Empty | Status::Sorted => 0,
        }
    }
}
