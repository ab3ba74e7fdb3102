// SPDX-License-Identifier: AGPL-3.0-or-later
//! Archive index
//!
//! Reads every member of a zip archive once and keys it by normalized
//! absolute path. Implicit parent directories are not materialized; the
//! filesystem derives them from key prefixes.

use bytes::Bytes;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use vsh_core::{Entry, Metadata, VirtualPath, VshError, VshResult};
use zip::ZipArchive;

/// Flat mapping from absolute path to entry, loaded in one pass
#[derive(Debug, Clone, Default)]
pub struct ArchiveIndex {
    entries: BTreeMap<String, Entry>,
}

impl ArchiveIndex {
    /// Load the archive at `path`.
    pub fn open(path: impl AsRef<Path>) -> VshResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| VshError::Load(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Indexing archive {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Load an archive from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> VshResult<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut index = Self::default();

        for i in 0..archive.len() {
            let mut member = archive.by_index(i)?;
            let name = member.name().to_string();
            let path = VirtualPath::new(name.trim_end_matches('/'));
            if path.is_root() {
                tracing::warn!("Skipping archive member with empty path: {:?}", name);
                continue;
            }

            let metadata = Metadata::new()
                .with_size(member.size())
                .with_compressed_size(member.compressed_size())
                .with_crc32(member.crc32());

            let entry = if member.is_dir() {
                Entry::directory(path)
            } else {
                let mut data = Vec::with_capacity(member.size() as usize);
                member
                    .read_to_end(&mut data)
                    .map_err(|e| VshError::Load(format!("{}: {}", name, e)))?;
                Entry::file(path, Bytes::from(data))
            };
            index.insert(entry.with_metadata(metadata));
        }

        tracing::debug!("Indexed {} archive members", index.len());
        Ok(index)
    }

    /// Build an index from already constructed entries.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: Entry) {
        let key = entry.path.to_path_string();
        if let Some(previous) = self.entries.insert(key, entry) {
            tracing::warn!("Duplicate archive member {}, keeping the later one", previous.path);
        }
    }

    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub(crate) fn into_entries(self) -> BTreeMap<String, Entry> {
        self.entries
    }
}
