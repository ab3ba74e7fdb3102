// SPDX-License-Identifier: AGPL-3.0-or-later
//! Virtual filesystem entries

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{Metadata, VirtualPath};

/// Entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

/// One archive member, keyed by its normalized absolute path
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: VirtualPath,
    pub kind: EntryKind,
    pub metadata: Metadata,
    /// Member contents, loaded when the archive is indexed. Empty for directories.
    pub data: Bytes,
}

impl Entry {
    pub fn file(path: VirtualPath, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let metadata = Metadata::new().with_size(data.len() as u64);
        Self { path, kind: EntryKind::File, metadata, data }
    }

    pub fn directory(path: VirtualPath) -> Self {
        Self { path, kind: EntryKind::Directory, metadata: Metadata::new(), data: Bytes::new() }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn name(&self) -> Option<&str> {
        self.path.name()
    }

    pub fn size(&self) -> u64 {
        self.metadata.size
    }
}

/// Children of one directory, split by kind and sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl DirectoryListing {
    pub fn new(directories: Vec<String>, files: Vec<String>) -> Self {
        Self { directories, files }
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_size() {
        let entry = Entry::file(VirtualPath::new("/notes.txt"), "hello\n");
        assert!(entry.is_file());
        assert_eq!(entry.size(), 6);
        assert_eq!(entry.name(), Some("notes.txt"));
    }

    #[test]
    fn test_directory_entry() {
        let entry = Entry::directory(VirtualPath::new("/dir1"));
        assert!(entry.is_directory());
        assert!(entry.data.is_empty());
        assert_eq!(entry.size(), 0);
    }
}
