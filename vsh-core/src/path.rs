// SPDX-License-Identifier: AGPL-3.0-or-later
//! Virtual path abstraction
//!
//! Paths inside the shell never touch the host filesystem. Resolution of
//! `.`, `..` and repeated slashes is purely lexical.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute, normalized location inside the virtual filesystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VirtualPath {
    /// Path segments, root first
    pub segments: Vec<String>,
}

impl VirtualPath {
    /// Parse a path as if it were absolute.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self::root().join(path)
    }

    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Resolve `path` against `self`. An absolute `path` ignores `self`.
    pub fn join(&self, path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let mut segments = if path.starts_with('/') {
            Vec::new()
        } else {
            self.segments.clone()
        };
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                "." => {}
                // `..` at root stays at root
                ".." => {
                    segments.pop();
                }
                _ => segments.push(part.to_string()),
            }
        }
        Self { segments }
    }

    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(|s| s.as_str())
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn to_path_string(&self) -> String {
        if self.segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.segments.join("/"))
        }
    }

    /// Prefix used when scanning keys for children: always ends in `/`.
    pub fn to_dir_prefix(&self) -> String {
        if self.segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", self.segments.join("/"))
        }
    }
}

/// Normalize `path` against `current_dir` into an absolute path string.
pub fn normalize(path: &str, current_dir: &str) -> String {
    VirtualPath::new(current_dir).join(path).to_path_string()
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}
