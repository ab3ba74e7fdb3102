// SPDX-License-Identifier: AGPL-3.0-or-later
//! Virtual filesystem over an archive index
//!
//! A path can be entered when some key starts with it, whether or not the
//! archive stored an explicit directory member.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::path::Path;
use vsh_core::{DirectoryListing, Entry, VirtualPath, VshError, VshResult};

use crate::ArchiveIndex;

/// Entry mapping plus the session's current directory
#[derive(Debug, Clone)]
pub struct VirtualFilesystem {
    entries: BTreeMap<String, Entry>,
    current_dir: VirtualPath,
}

impl VirtualFilesystem {
    pub fn new(index: ArchiveIndex) -> Self {
        Self {
            entries: index.into_entries(),
            current_dir: VirtualPath::root(),
        }
    }

    /// Index the archive at `path` and start at `/`.
    pub fn open(path: impl AsRef<Path>) -> VshResult<Self> {
        Ok(Self::new(ArchiveIndex::open(path)?))
    }

    pub fn current_dir(&self) -> String {
        self.current_dir.to_path_string()
    }

    /// Resolve `path` against the current directory.
    pub fn resolve(&self, path: &str) -> VirtualPath {
        self.current_dir.join(path)
    }

    pub fn normalize(&self, path: &str) -> String {
        self.resolve(path).to_path_string()
    }

    pub fn entry(&self, path: &str) -> Option<&Entry> {
        self.entries.get(&self.normalize(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys starting with `prefix`, in order.
    fn keys_under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a String, &'a Entry)> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
    }

    /// Prefix-based existence: `/`, or any key that starts with the path
    /// string. `/dir` therefore exists when only `/dir1/...` is stored.
    fn exists_as_prefix(&self, path: &VirtualPath) -> bool {
        if path.is_root() {
            return true;
        }
        let prefix = path.to_path_string();
        let found = self.keys_under(&prefix).next().is_some();
        found
    }

    /// List the direct children of `path`. A directory with no children, or
    /// one that does not exist, lists as empty.
    pub fn list_directory(&self, path: &str) -> DirectoryListing {
        let dir = self.resolve(path);
        let prefix = dir.to_dir_prefix();
        let mut directories = BTreeSet::new();
        let mut files = BTreeSet::new();

        for (key, entry) in self.keys_under(&prefix) {
            let rest = &key[prefix.len()..];
            match rest.split_once('/') {
                Some((child, _)) => {
                    directories.insert(child.to_string());
                }
                None if entry.is_directory() => {
                    directories.insert(rest.to_string());
                }
                None => {
                    files.insert(rest.to_string());
                }
            }
        }

        DirectoryListing::new(directories.into_iter().collect(), files.into_iter().collect())
    }

    /// Move the cursor to `path`. Fails with `NotFound` naming `path` as given.
    pub fn change_directory(&mut self, path: &str) -> VshResult<()> {
        let target = self.resolve(path);
        if !self.exists_as_prefix(&target) {
            return Err(VshError::NotFound(path.to_string()));
        }
        tracing::debug!("cd {} -> {}", self.current_dir, target);
        self.current_dir = target;
        Ok(())
    }

    /// Read a whole file as UTF-8 text.
    pub fn read_file(&self, path: &str) -> VshResult<String> {
        let key = self.normalize(path);
        let entry = self
            .entries
            .get(&key)
            .filter(|e| e.is_file())
            .ok_or_else(|| VshError::NotFound(path.to_string()))?;
        String::from_utf8(entry.data.to_vec()).map_err(|_| VshError::Decode(path.to_string()))
    }

    /// Re-key the entry stored exactly at `src` under `dst`, replacing
    /// whatever was at `dst`. Descendants of `src` are not moved.
    pub fn rename(&mut self, src: &str, dst: &str) -> VshResult<()> {
        let src_key = self.normalize(src);
        let dst_path = self.resolve(dst);
        if dst_path.is_root() {
            return Err(VshError::Usage(format!("mv: cannot move {} onto /", src)));
        }
        let mut entry = self
            .entries
            .remove(&src_key)
            .ok_or_else(|| VshError::NotFound(src.to_string()))?;

        entry.path = dst_path;
        let dst_key = entry.path.to_path_string();
        tracing::debug!("mv {} -> {}", src_key, dst_key);
        if self.entries.insert(dst_key, entry).is_some() {
            tracing::debug!("Replaced existing entry at destination");
        }
        Ok(())
    }
}
