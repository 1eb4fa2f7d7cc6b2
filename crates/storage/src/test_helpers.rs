// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for storage tests.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use plog_core::{FakeClock, LogEntry, PluginRoot, Severity};
use tempfile::TempDir;

use crate::PluginLog;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, mi, s).unwrap()
}

pub fn texts(entries: &[LogEntry]) -> Vec<&str> {
    entries.iter().map(LogEntry::text).collect()
}

/// A plugin root in a temp dir with a log pinned to `2026-01-15 12:00:00`.
pub struct TestLog {
    pub dir: TempDir,
    pub clock: FakeClock,
    pub log: PluginLog<FakeClock>,
}

impl TestLog {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let root = PluginRoot::initialize(dir.path()).unwrap();
        let clock = FakeClock::new();
        let log = PluginLog::with_clock(&root, clock.clone()).unwrap();
        Self { dir, clock, log }
    }

    /// A log whose live file exists but holds nothing.
    pub fn empty() -> Self {
        let test = Self::new();
        test.log.clear(false).unwrap();
        test
    }

    pub fn data_dir(&self) -> &Path {
        &self.log.layout().data_dir
    }

    pub fn live_path(&self) -> PathBuf {
        self.log.layout().live_path.clone()
    }

    /// Write an untagged entry stamped `ts`.
    pub fn write_at(&self, ts: NaiveDateTime, text: &str) -> LogEntry {
        self.clock.set(ts);
        self.log.write(text, Severity::none()).unwrap()
    }

    pub fn live_text(&self) -> String {
        std::fs::read_to_string(self.live_path()).unwrap()
    }

    pub fn archive_text(&self, date: NaiveDate) -> Option<String> {
        std::fs::read_to_string(self.log.layout().archive_path(date)).ok()
    }
}
