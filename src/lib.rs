//! authors-sorted core library.
//!
//! Checks that the top-level keys of an author registry (`authors.yaml`)
//! are in case-insensitive alphabetical order and reports any entries that
//! are out of place.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Repository root discovery and effective configuration.
//! - `error`: Errors for unreadable or malformed registries.
//! - `registry`: Order-preserving registry loading.
//! - `order`: Case-insensitive order check.
//! - `models`: Check result structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod order;
pub mod output;
pub mod registry;
pub mod utils;
