// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The handle plugin code holds to write and read its log.

use std::fmt;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use plog_core::{Clock, DataDir, LogEntry, Severity, SystemClock};
use serde::Serialize;
use tracing::warn;

use crate::archive::Archiver;
use crate::error::LogError;
use crate::live::LiveLog;
use crate::log_paths::LogLayout;
use crate::query::LogQuery;

/// Live store, queries and rotation over one plugin's data directory.
#[derive(Debug, Clone)]
pub struct PluginLog<C: Clock = SystemClock> {
    live: LiveLog<C>,
    query: LogQuery<C>,
    archiver: Archiver<C>,
}

impl PluginLog<SystemClock> {
    /// Open the log of an initialized plugin, stamped with local time.
    pub fn open(dir: &impl DataDir) -> Result<Self, LogError> {
        Self::with_clock(dir, SystemClock)
    }
}

impl<C: Clock> PluginLog<C> {
    pub fn with_clock(dir: &impl DataDir, clock: C) -> Result<Self, LogError> {
        Ok(Self::from_layout(LogLayout::resolve(dir)?, clock))
    }

    pub fn from_layout(layout: LogLayout, clock: C) -> Self {
        let live = LiveLog::new(layout, clock);
        Self {
            query: LogQuery::new(live.clone()),
            archiver: Archiver::new(live.clone()),
            live,
        }
    }

    pub fn layout(&self) -> &LogLayout {
        self.live.layout()
    }

    // --- writing ---

    pub fn write(&self, text: &str, severity: impl Into<Severity>) -> Result<LogEntry, LogError> {
        self.live.write(text, severity.into())
    }

    pub fn debug(&self, text: &str) -> Result<LogEntry, LogError> {
        self.write(text, Severity::debug())
    }

    pub fn info(&self, text: &str) -> Result<LogEntry, LogError> {
        self.write(text, Severity::info())
    }

    pub fn warning(&self, text: &str) -> Result<LogEntry, LogError> {
        self.write(text, Severity::warning())
    }

    pub fn error(&self, text: &str) -> Result<LogEntry, LogError> {
        self.write(text, Severity::error())
    }

    /// Record an HTTP-level event, tagged `HTTP`.
    pub fn http(&self, text: &str) -> Result<LogEntry, LogError> {
        self.write(text, Severity::http())
    }

    /// Write `value` as compact JSON.
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        value: &T,
        severity: impl Into<Severity>,
    ) -> Result<LogEntry, LogError> {
        let text = serde_json::to_string(value)?;
        self.write(&text, severity)
    }

    /// Log `err` at ERROR and hand it back as `Err`.
    ///
    /// ```ignore
    /// return log.fail(SettingsError::Missing("api_key"));
    /// ```
    ///
    /// A failure to write the entry is reported via tracing; `err` is
    /// returned either way.
    pub fn fail<T, E: fmt::Display>(&self, err: E) -> Result<T, E> {
        if let Err(e) = self.error(&err.to_string()) {
            warn!(error = %e, "failed to record error entry");
        }
        Err(err)
    }

    // --- live file ---

    pub fn path(&self) -> Result<PathBuf, LogError> {
        self.live.path()
    }

    pub fn append(&self, entry: &LogEntry) -> Result<(), LogError> {
        self.live.append(entry)
    }

    pub fn clear(&self, with_notice: bool) -> Result<(), LogError> {
        self.live.clear(with_notice)
    }

    pub fn is_empty(&self) -> Result<bool, LogError> {
        self.live.is_empty()
    }

    // --- queries ---

    pub fn lines(&self, start: i64, count: i64) -> Result<Vec<LogEntry>, LogError> {
        self.query.lines(start, count)
    }

    pub fn tail(&self, n: i64) -> Result<Vec<LogEntry>, LogError> {
        self.query.tail(n)
    }

    pub fn line(&self, index: i64) -> Result<Option<LogEntry>, LogError> {
        self.query.line(index)
    }

    pub fn first(&self) -> Result<Option<LogEntry>, LogError> {
        self.query.first()
    }

    pub fn last(&self) -> Result<Option<LogEntry>, LogError> {
        self.query.last()
    }

    pub fn between(
        &self,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Result<Vec<LogEntry>, LogError> {
        self.query.between(start, end)
    }

    pub fn archived_days(&self) -> Result<Vec<NaiveDate>, LogError> {
        self.query.archived_days()
    }

    // --- archives ---

    pub fn rotate(&self) -> Result<usize, LogError> {
        self.archiver.rotate()
    }

    pub fn load(&self, date: NaiveDate) -> Result<Option<Vec<LogEntry>>, LogError> {
        self.archiver.load(date)
    }

    pub fn save(&self, date: NaiveDate, entries: &[LogEntry]) -> Result<(), LogError> {
        self.archiver.save(date, entries)
    }
}

#[cfg(test)]
#[path = "plugin_log_tests.rs"]
mod tests;
