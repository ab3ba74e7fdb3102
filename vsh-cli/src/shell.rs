// SPDX-License-Identifier: AGPL-3.0-or-later
//! Command dispatch
//!
//! A `Shell` is one session: the archive filesystem, the session log and
//! where that log goes. Every line passes through [`Shell::execute`],
//! whether it was typed or replayed from a startup script.

use std::io::Write;
use std::path::{Path, PathBuf};
use vsh_core::VshResult;
use vsh_vfs::VirtualFilesystem;

use crate::commands;
use crate::config::Config;
use crate::session::SessionRecorder;

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct Shell {
    vfs: VirtualFilesystem,
    recorder: SessionRecorder,
    log_file: PathBuf,
}

impl Shell {
    /// Open the configured archive. Fails with `Load` if it cannot be indexed.
    pub fn new(config: &Config) -> VshResult<Self> {
        let vfs = VirtualFilesystem::open(&config.filesystem)?;
        tracing::info!(
            "Session for {} over {} ({} entries)",
            config.username,
            config.filesystem.display(),
            vfs.len()
        );
        Ok(Self::with_filesystem(vfs, &config.username, &config.logfile))
    }

    pub fn with_filesystem(vfs: VirtualFilesystem, actor: &str, log_file: impl Into<PathBuf>) -> Self {
        Self {
            vfs,
            recorder: SessionRecorder::new(actor),
            log_file: log_file.into(),
        }
    }

    #[cfg(test)]
    pub fn filesystem(&self) -> &VirtualFilesystem {
        &self.vfs
    }

    #[cfg(test)]
    pub fn recorder(&self) -> &SessionRecorder {
        &self.recorder
    }

    pub fn prompt(&self) -> String {
        format!("{}@virtual:{}$ ", self.recorder.actor(), self.vfs.current_dir())
    }

    /// Record and run one command line. Failures of the command itself are
    /// printed to `out`; only output and log-writing errors are returned.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> VshResult<Control> {
        self.recorder.record(line);

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = parts.split_first() else {
            return Ok(Control::Continue);
        };
        tracing::debug!("dispatch {verb} {args:?}");

        let result = match verb {
            "ls" => commands::ls(&self.vfs, args, out),
            "cd" => commands::cd(&mut self.vfs, args),
            "mv" => commands::mv(&mut self.vfs, args),
            "tail" => commands::tail(&self.vfs, args, out),
            "date" => commands::date(out),
            "exit" => {
                self.finish()?;
                return Ok(Control::Exit);
            }
            _ => {
                writeln!(out, "unknown command: {verb}")?;
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_usage() => writeln!(out, "{e}")?,
            Err(e) if e.is_recoverable() => writeln!(out, "Error: {e}")?,
            Err(e) => return Err(e),
        }
        Ok(Control::Continue)
    }

    /// Run one line and flush `out`. If either fails the session log is
    /// written before the error is returned.
    pub fn run_line(&mut self, line: &str, out: &mut impl Write) -> VshResult<Control> {
        let result = self
            .execute(line, out)
            .and_then(|control| out.flush().map(|()| control).map_err(Into::into));
        if let Err(e) = result {
            if let Err(save_err) = self.finish() {
                tracing::error!("Could not write session log: {save_err}");
            }
            return Err(e);
        }
        result
    }

    /// Replay a startup script line by line. A missing script is skipped.
    pub fn run_script(&mut self, path: &Path, out: &mut impl Write) -> VshResult<Control> {
        if !path.exists() {
            tracing::warn!("Startup script {} not found, skipping", path.display());
            return Ok(Control::Continue);
        }
        let script = std::fs::read_to_string(path)?;
        tracing::info!("Running startup script {}", path.display());
        for line in script.lines() {
            if self.run_line(line.trim(), out)? == Control::Exit {
                return Ok(Control::Exit);
            }
        }
        Ok(Control::Continue)
    }

    /// Write the session log to its configured location.
    pub fn finish(&self) -> VshResult<()> {
        self.recorder.save(&self.log_file)
    }
}
