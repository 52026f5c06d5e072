//! Loading of the author registry.
//!
//! The registry is a YAML mapping from username to arbitrary metadata. Only
//! the declaration order of the top-level keys matters here, so the document
//! is parsed into `serde_yaml::Value`, whose `Mapping` keeps insertion order.
//! The file is read to completion and closed before parsing starts.

use crate::error::{Error, Result};
use serde_yaml::Value as Yaml;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered usernames with their opaque metadata, as declared on disk.
#[derive(Debug)]
pub struct AuthorRegistry {
    path: PathBuf,
    entries: Vec<(String, Yaml)>,
}

impl AuthorRegistry {
    /// Read and parse the registry at `path`.
    ///
    /// An empty file, a null document, an empty collection, or a falsy
    /// scalar (`false`, `0`, `''`) yields an empty registry rather than an
    /// error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Parse registry text; `path` is only used for error reporting.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let empty = AuthorRegistry {
            path: path.to_path_buf(),
            entries: Vec::new(),
        };
        if !has_content(text) {
            return Ok(empty);
        }
        let doc: Yaml = serde_yaml::from_str(text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mapping = match doc {
            Yaml::Null | Yaml::Bool(false) => return Ok(empty),
            Yaml::String(s) if s.is_empty() => return Ok(empty),
            Yaml::Number(n) if n.as_f64() == Some(0.0) => return Ok(empty),
            Yaml::Sequence(seq) if seq.is_empty() => return Ok(empty),
            Yaml::Mapping(m) => m,
            other => {
                return Err(Error::NotAMapping {
                    path: path.to_path_buf(),
                    found: kind_of(&other),
                })
            }
        };
        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let username = username_of(&key).ok_or_else(|| Error::UnsupportedKey {
                path: path.to_path_buf(),
                key: serde_yaml::to_string(&key)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_else(|_| kind_of(&key).to_string()),
            })?;
            entries.push((username, value));
        }
        Ok(AuthorRegistry {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usernames in declaration order.
    pub fn usernames(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

// True when something other than blank lines, comments, and document
// markers is present.
fn has_content(text: &str) -> bool {
    text.lines().map(str::trim).any(|line| {
        !(line.is_empty() || line.starts_with('#') || line == "---" || line == "...")
    })
}

// Plain scalars such as `42` or `true` load as numbers/bools; their textual
// form is still a usable username.
fn username_of(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(v: &Yaml) -> &'static str {
    match v {
        Yaml::Null => "null",
        Yaml::Bool(_) => "a boolean",
        Yaml::Number(_) => "a number",
        Yaml::String(_) => "a string",
        Yaml::Sequence(_) => "a sequence",
        Yaml::Mapping(_) => "a mapping",
        Yaml::Tagged(_) => "a tagged value",
    }
}
