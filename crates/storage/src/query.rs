// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-side queries over the live log and its day archives.
//!
//! Entries are appended in real time, so every file is already in
//! timestamp order; nothing here re-sorts.

use std::fs;
use std::io;

use chrono::{NaiveDate, NaiveDateTime};
use plog_core::{parse_all, Clock, LogEntry};
use tracing::warn;

use crate::error::LogError;
use crate::live::LiveLog;
use crate::log_paths::archive_date;

/// Line-range and time-window queries.
#[derive(Debug, Clone)]
pub struct LogQuery<C: Clock> {
    live: LiveLog<C>,
}

impl<C: Clock> LogQuery<C> {
    pub fn new(live: LiveLog<C>) -> Self {
        Self { live }
    }

    /// Slice the live file by zero-based entry index.
    ///
    /// - `count == 0` reads to the end.
    /// - `count < 0` reads the `-count` entries that end at `start`, so
    ///   `lines(0, -n)` is the last `n` entries.
    /// - a negative `start` (after the above) counts from the end.
    ///
    /// Out-of-range requests yield an empty vector.
    pub fn lines(&self, start: i64, count: i64) -> Result<Vec<LogEntry>, LogError> {
        Ok(slice_entries(self.live.read_entries()?, start, count))
    }

    /// The last `n` entries (all of them for `n == 0`).
    pub fn tail(&self, n: i64) -> Result<Vec<LogEntry>, LogError> {
        let entries = self.live.read_entries()?;
        Ok(match n.checked_neg() {
            Some(count) => slice_entries(entries, 0, count),
            None => Vec::new(),
        })
    }

    /// The entry at `index`; negative indexes count from the end.
    pub fn line(&self, index: i64) -> Result<Option<LogEntry>, LogError> {
        Ok(self.lines(index, 1)?.into_iter().next())
    }

    pub fn first(&self) -> Result<Option<LogEntry>, LogError> {
        Ok(self.live.read_entries()?.into_iter().next())
    }

    pub fn last(&self) -> Result<Option<LogEntry>, LogError> {
        Ok(self.live.read_entries()?.pop())
    }

    /// Entries with `start <= timestamp < end` from archives and the live file.
    ///
    /// Archives dated within `[start.date(), end.date())` are read in day
    /// order, then the live file is always scanned since it may still hold
    /// entries from earlier days that were never rotated. `end` defaults to now.
    pub fn between(
        &self,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Result<Vec<LogEntry>, LogError> {
        let end = end.unwrap_or_else(|| self.live.clock().now());
        let live = self.live.read_entries()?;
        self.window(&live, start, end)
    }

    /// [`LogQuery::between`] over already-decoded live entries.
    pub(crate) fn window(
        &self,
        live: &[LogEntry],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<LogEntry>, LogError> {
        self.window_over(&self.archived_days()?, live, start, end)
    }

    /// [`LogQuery::window`] against an already-listed set of archive days.
    pub(crate) fn window_over(
        &self,
        archived: &[NaiveDate],
        live: &[LogEntry],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<LogEntry>, LogError> {
        let in_window = |entry: &LogEntry| entry.timestamp() >= start && entry.timestamp() < end;
        let (first_day, end_day) = (start.date(), end.date());

        let mut matching = Vec::new();
        for &day in archived {
            if day >= first_day && day < end_day {
                matching.extend(self.read_archive(day)?.into_iter().filter(in_window));
            }
        }
        matching.extend(live.iter().filter(|e| in_window(*e)).cloned());

        Ok(matching)
    }

    /// Days that have an archive file, oldest first.
    pub fn archived_days(&self) -> Result<Vec<NaiveDate>, LogError> {
        let dir = &self.live.layout().archive_dir;
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut days = Vec::new();
        for item in read_dir {
            let path = item?.path();
            if !path.is_file() {
                continue;
            }
            match archive_date(&path) {
                Some(day) => days.push(day),
                None if path.extension().is_some_and(|ext| ext == "log") => {
                    warn!(path = %path.display(), "ignoring archive with unrecognized name");
                }
                None => {}
            }
        }
        days.sort_unstable();
        Ok(days)
    }

    /// Decode one day's archive; an absent archive is `None`.
    pub(crate) fn read_archive_opt(&self, day: NaiveDate) -> Result<Option<Vec<LogEntry>>, LogError> {
        let path = self.live.layout().archive_path(day);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(parse_all(&text)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn read_archive(&self, day: NaiveDate) -> Result<Vec<LogEntry>, LogError> {
        Ok(self.read_archive_opt(day)?.unwrap_or_default())
    }
}

/// Apply [`LogQuery::lines`] slice semantics to a decoded sequence.
///
/// Normalization runs in `i128` so no `i64` argument can overflow.
pub(crate) fn slice_entries(mut entries: Vec<LogEntry>, start: i64, count: i64) -> Vec<LogEntry> {
    let total = entries.len() as i128;
    let (mut start, mut count) = (i128::from(start), i128::from(count));

    if count == 0 {
        count = total - start;
    }
    if count < 0 {
        start += count;
        count = -count;
    }
    if start < 0 {
        start += total;
    }
    if start < 0 || start + count > total {
        return Vec::new();
    }

    // In range: 0 <= start <= start + count <= len.
    let (from, to) = (start as usize, (start + count) as usize);
    entries.truncate(to);
    entries.split_off(from)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
