// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log entry value type and severity tags.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time_fmt::{self, truncate_micros};

/// Severity tag of a log entry.
///
/// An open string: the five well-known levels have constructors, but any
/// caller-supplied word (e.g. `HTTP`) is a valid tag. The empty string means
/// "no severity" and is omitted from the serialized line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(String);

impl Severity {
    pub const DEBUG: &'static str = "DEBUG";
    pub const INFO: &'static str = "INFO";
    pub const WARNING: &'static str = "WARNING";
    pub const ERROR: &'static str = "ERROR";
    pub const HTTP: &'static str = "HTTP";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn debug() -> Self {
        Self::new(Self::DEBUG)
    }

    pub fn info() -> Self {
        Self::new(Self::INFO)
    }

    pub fn warning() -> Self {
        Self::new(Self::WARNING)
    }

    pub fn error() -> Self {
        Self::new(Self::ERROR)
    }

    pub fn http() -> Self {
        Self::new(Self::HTTP)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Severity {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Severity {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One timestamped, severity-tagged log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "time_fmt::serde_timestamp")]
    timestamp: NaiveDateTime,
    severity: Severity,
    text: String,
}

impl LogEntry {
    /// Build an entry. The timestamp is truncated to microseconds, the
    /// precision of the on-disk format.
    pub fn new(timestamp: NaiveDateTime, severity: impl Into<Severity>, text: impl Into<String>) -> Self {
        Self {
            timestamp: truncate_micros(timestamp),
            severity: severity.into(),
            text: text.into(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    /// The serialized line, without its trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = crate::codec::serialize(self);
        f.write_str(line.trim_end_matches('\n'))
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
