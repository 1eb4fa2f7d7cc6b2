// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live log file: today's append-only entries.
//!
//! Every write holds an exclusive advisory lock on the file for its
//! duration so concurrent plugin processes never interleave partial
//! entries. Reads take no lock; a reader racing a writer may see a torn
//! final line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use plog_core::{parse_all, serialize, Clock, LogEntry, Severity};
use tracing::debug;

use crate::error::LogError;
use crate::log_paths::LogLayout;

/// Text of the entry written when the live file is first created.
pub const CREATED_NOTICE: &str = "Log created!";

/// Text of the entry written by [`LiveLog::clear`] when a notice is requested.
pub const CLEARED_NOTICE: &str = "Log cleared!";

/// The live log file at `<data>/plugin.log`.
#[derive(Debug, Clone)]
pub struct LiveLog<C: Clock> {
    layout: LogLayout,
    clock: C,
}

impl<C: Clock> LiveLog<C> {
    pub fn new(layout: LogLayout, clock: C) -> Self {
        Self { layout, clock }
    }

    pub fn layout(&self) -> &LogLayout {
        &self.layout
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Path to the live file, creating it if missing.
    ///
    /// A freshly created file starts with a `Log created!` INFO entry.
    pub fn path(&self) -> Result<PathBuf, LogError> {
        let path = &self.layout.live_path;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let notice = LogEntry::new(self.clock.now(), Severity::info(), CREATED_NOTICE);
            append_locked(path, &serialize(&notice))?;
            debug!(path = %path.display(), "created live log");
        }
        Ok(path.clone())
    }

    /// Append one entry under an exclusive lock.
    pub fn append(&self, entry: &LogEntry) -> Result<(), LogError> {
        let path = self.path()?;
        append_locked(&path, &serialize(entry))?;
        Ok(())
    }

    /// Stamp `text` with the current time and append it.
    pub fn write(&self, text: &str, severity: Severity) -> Result<LogEntry, LogError> {
        let entry = LogEntry::new(self.clock.now(), severity, text);
        self.append(&entry)?;
        Ok(entry)
    }

    /// Truncate the live file.
    ///
    /// With `with_notice`, a `Log cleared!` INFO entry is written under the
    /// same lock, so the file is never observed empty after a deliberate clear.
    pub fn clear(&self, with_notice: bool) -> Result<(), LogError> {
        let path = self.path()?;
        let mut file = LockedFile::open(&path)?;
        if with_notice {
            let notice = LogEntry::new(self.clock.now(), Severity::info(), CLEARED_NOTICE);
            file.replace(&serialize(&notice))?;
        } else {
            file.replace("")?;
        }
        Ok(())
    }

    /// True when the live file has zero length (creating it first if missing).
    pub fn is_empty(&self) -> Result<bool, LogError> {
        let path = self.path()?;
        Ok(fs::metadata(path)?.len() == 0)
    }

    /// Decode the live file without creating it.
    pub(crate) fn read_entries(&self) -> Result<Vec<LogEntry>, LogError> {
        let path = &self.layout.live_path;
        match fs::read_to_string(path) {
            Ok(text) => Ok(parse_all(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LogError::MissingFile(path.clone())),
            Err(e) => Err(e.into()),
        }
    }

    /// Exclusively lock the live file for a read-modify-write cycle.
    pub(crate) fn lock(&self) -> Result<LockedFile, LogError> {
        let path = self.path()?;
        Ok(LockedFile::open(&path)?)
    }
}

fn append_locked(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.lock_exclusive()?;
    let written = file.write_all(text.as_bytes());
    FileExt::unlock(&file)?;
    written
}

/// An open live file holding an exclusive lock until dropped.
pub(crate) struct LockedFile {
    file: File,
}

impl LockedFile {
    /// Open without truncating (truncation happens after the lock is held).
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }

    pub(crate) fn read_to_string(&mut self) -> io::Result<String> {
        let mut text = String::new();
        self.file.seek(SeekFrom::Start(0))?;
        self.file.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Replace the whole file content in place.
    pub(crate) fn replace(&mut self, contents: &str) -> io::Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(contents.as_bytes())?;
        self.file.sync_all()
    }
}

impl Drop for LockedFile {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod tests;
