// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path builders for the live log and its day archives.
//!
//! Layout under the plugin's data directory:
//!   `<data>/plugin.log`
//!   `<data>/logs/<YYYY-MM-DD>.log`

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use plog_core::{format_date, parse_date, DataDir, PluginError};

/// File name of the live log.
pub const LIVE_FILE_NAME: &str = "plugin.log";

/// Directory (under data) holding one archive per calendar day.
pub const ARCHIVE_DIR_NAME: &str = "logs";

/// Build the path to the live log file.
///
/// Structure: `{data_dir}/plugin.log`
pub fn live_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LIVE_FILE_NAME)
}

/// Build the path to the archive directory.
///
/// Structure: `{data_dir}/logs`
pub fn archive_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(ARCHIVE_DIR_NAME)
}

/// Build the path to one day's archive file.
///
/// Structure: `{archive_dir}/{YYYY-MM-DD}.log`
pub fn archive_log_path(archive_dir: &Path, date: NaiveDate) -> PathBuf {
    archive_dir.join(format!("{}.log", format_date(&date)))
}

/// Recover the day an archive file belongs to from its name.
///
/// Returns `None` for anything that is not `<YYYY-MM-DD>.log`.
pub fn archive_date(path: &Path) -> Option<NaiveDate> {
    if path.extension()? != "log" {
        return None;
    }
    parse_date(path.file_stem()?.to_str()?).ok()
}

/// Resolved locations used by every log component.
///
/// Built once from the plugin's data directory and passed by value to the
/// live store, query engine and archiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLayout {
    pub data_dir: PathBuf,
    pub live_path: PathBuf,
    pub archive_dir: PathBuf,
}

impl LogLayout {
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            live_path: live_log_path(&data_dir),
            archive_dir: archive_dir(&data_dir),
            data_dir,
        }
    }

    /// Resolve the layout from the plugin's data directory collaborator.
    pub fn resolve(dir: &impl DataDir) -> Result<Self, PluginError> {
        Ok(Self::for_data_dir(dir.data_path()?))
    }

    pub fn archive_path(&self, date: NaiveDate) -> PathBuf {
        archive_log_path(&self.archive_dir, date)
    }
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
