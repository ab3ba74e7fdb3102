// SPDX-License-Identifier: AGPL-3.0-or-later
//! Session log
//!
//! Every line handed to the shell is recorded, including empty lines,
//! unknown verbs and failed commands.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use vsh_core::VshResult;

/// One issued command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub user: String,
    pub datetime: DateTime<Local>,
    pub command: String,
}

#[derive(Serialize)]
struct SessionDocument<'a> {
    session: &'a [LogEntry],
}

/// Append-only record of the commands issued in one session
#[derive(Debug, Clone)]
pub struct SessionRecorder {
    actor: String,
    entries: Vec<LogEntry>,
}

impl SessionRecorder {
    pub fn new(actor: impl Into<String>) -> Self {
        Self { actor: actor.into(), entries: Vec::new() }
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn record(&mut self, command: &str) {
        self.entries.push(LogEntry {
            user: self.actor.clone(),
            datetime: Local::now(),
            command: command.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the log as JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> VshResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &SessionDocument { session: self.entries() })?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::info!("Wrote {} session records to {}", self.len(), path.display());
        Ok(())
    }
}
