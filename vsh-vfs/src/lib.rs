// SPDX-License-Identifier: AGPL-3.0-or-later
//! Archive-backed virtual filesystem for vsh
//!
//! A zip archive is indexed once into memory and then browsed through a
//! read-only hierarchy with a movable current directory. Renames only
//! change the in-memory mapping; the archive on disk is never written.

mod archive;
mod filesystem;

pub use archive::ArchiveIndex;
pub use filesystem::VirtualFilesystem;
