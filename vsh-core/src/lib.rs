// SPDX-License-Identifier: AGPL-3.0-or-later
//! vsh core
//!
//! Paths, entries and errors shared by the archive filesystem and the shell.

pub mod entry;
pub mod error;
pub mod metadata;
pub mod path;

pub use entry::{DirectoryListing, Entry, EntryKind};
pub use error::{VshError, VshResult};
pub use metadata::Metadata;
pub use path::{normalize, VirtualPath};
