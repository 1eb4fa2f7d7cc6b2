// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Day-bucketed rotation of the live log into archive files.
//!
//! Rotation moves every entry older than today into `logs/<YYYY-MM-DD>.log`
//! and rewrites the live file in place with what remains.

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use plog_core::{parse_all, serialize_all, Clock, LogEntry};
use tracing::{debug, info};

use crate::error::LogError;
use crate::live::LiveLog;
use crate::query::LogQuery;

/// Moves live entries into per-day archives.
#[derive(Debug, Clone)]
pub struct Archiver<C: Clock> {
    live: LiveLog<C>,
    query: LogQuery<C>,
}

impl<C: Clock> Archiver<C> {
    pub fn new(live: LiveLog<C>) -> Self {
        Self {
            query: LogQuery::new(live.clone()),
            live,
        }
    }

    /// Archive every day before today; keep today's entries in the live file.
    ///
    /// Each past day that still has entries in the live file is collected
    /// from its existing archive plus the live file and written back to that
    /// archive. Archives of days with no live entries are not touched. Today
    /// is rewritten into the live file. The live file stays locked for the
    /// whole rotation, so concurrent writers wait rather than lose entries.
    ///
    /// Returns the number of archive files written, excluding the live file.
    pub fn rotate(&self) -> Result<usize, LogError> {
        if self.live.is_empty()? {
            return Ok(0);
        }

        let mut locked = self.live.lock()?;
        let entries = parse_all(&locked.read_to_string()?)?;
        if entries.is_empty() {
            return Ok(0);
        }
        let today = self.live.clock().today();

        let mut past_days: Vec<NaiveDate> = entries
            .iter()
            .map(|e| e.timestamp().date())
            .filter(|day| *day < today)
            .collect();
        past_days.sort_unstable();
        past_days.dedup();

        let archived_days = self.query.archived_days()?;
        for &day in &past_days {
            let (start, end) = day_bounds(day);
            let day_entries = self.query.window_over(&archived_days, &entries, start, end)?;
            self.write_archive(day, &day_entries)?;
        }

        // Entries stamped after today (clock skew) stay live too.
        let kept: Vec<LogEntry> = entries
            .iter()
            .filter(|e| e.timestamp().date() >= today)
            .cloned()
            .collect();
        locked.replace(&serialize_all(&kept))?;
        debug!(%today, entries = kept.len(), "rewrote live log");

        let archived = past_days.len();
        info!(archived, "rotated plugin log");
        Ok(archived)
    }

    /// Decode the entries stored for `date`: the live file for today, its
    /// archive otherwise. `None` when that file does not exist.
    pub fn load(&self, date: NaiveDate) -> Result<Option<Vec<LogEntry>>, LogError> {
        if date == self.live.clock().today() {
            return match self.live.read_entries() {
                Ok(entries) => Ok(Some(entries)),
                Err(LogError::MissingFile(_)) => Ok(None),
                Err(e) => Err(e),
            };
        }
        self.query.read_archive_opt(date)
    }

    /// Persist `entries` as the content for `date`, replacing what was there.
    ///
    /// Today goes to the live file under its lock; other days to their archive.
    pub fn save(&self, date: NaiveDate, entries: &[LogEntry]) -> Result<(), LogError> {
        if date == self.live.clock().today() {
            let mut locked = self.live.lock()?;
            locked.replace(&serialize_all(entries))?;
            return Ok(());
        }
        self.write_archive(date, entries)
    }

    /// Write an archive atomically (write to .tmp, then rename).
    fn write_archive(&self, date: NaiveDate, entries: &[LogEntry]) -> Result<(), LogError> {
        let layout = self.live.layout();
        fs::create_dir_all(&layout.archive_dir)?;

        let path = layout.archive_path(date);
        let tmp_path = path.with_extension("tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(serialize_all(entries).as_bytes())?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), entries = entries.len(), "wrote log archive");
        Ok(())
    }
}

/// `[midnight of day, midnight of the next day)`.
fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let next = day.succ_opt().unwrap_or(NaiveDate::MAX);
    (day.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN))
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
