//! Output rendering for check results.
//!
//! Supports `human` (default) and `json`. The human form is plain text so
//! that it stays stable when piped; `json` carries the same data as an
//! object.

use crate::models::{CheckResult, Status};
use serde_json::json;
use serde_json::Value as JsonVal;

/// Print a check result in the requested format.
pub fn print_result(res: &CheckResult, output: &str) {
    match output {
        "json" => println!("{:#}", compose_json(res)),
        _ => print!("{}", render_human(res)),
    }
}

/// Compose the human report (pure) for testing purposes.
pub fn render_human(res: &CheckResult) -> String {
    match res.status {
        Status::Empty => format!("{} is empty\n", res.file),
        Status::Sorted => format!("{} is sorted correctly\n", res.file),
        Status::Unsorted => {
            let mut out = format!(
                "{} is not sorted alphabetically (case-insensitive).\n",
                res.file
            );
            out.push_str("\nCurrent order:\n");
            for k in &res.current {
                out.push_str(&format!("  {}\n", k));
            }
            out.push_str("\nExpected order:\n");
            for k in &res.expected {
                out.push_str(&format!("  {}\n", k));
            }
            out.push_str("\nOut of place entries:\n");
            for m in &res.misplaced {
                out.push_str(&format!(
                    "  Position {}: got '{}', expected '{}'\n",
                    m.position, m.got, m.expected
                ));
            }
            out
        }
    }
}

/// Compose the JSON object (pure) for testing/snapshot purposes.
pub fn compose_json(res: &CheckResult) -> JsonVal {
    let misplaced: Vec<_> = res
        .misplaced
        .iter()
        .map(|m| {
            json!({
                "position": m.position,
                "got": m.got,
                "expected": m.expected,
            })
        })
        .collect();
    json!({
        "file": res.file,
        "status": res.status,
        "current": res.current,
        "expected": res.expected,
        "misplaced": misplaced,
    })
}
