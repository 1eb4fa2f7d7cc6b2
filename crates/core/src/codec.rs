// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text codec for log files.
//!
//! One entry per record:
//!
//! ```text
//! [2026-01-30 08:14:09.123456] [INFO] first line of the message
//!                              second line, indented under the text
//! ```
//!
//! The severity bracket is omitted for untagged entries. Interior newlines
//! are followed by [`CONTINUATION`] so multi-line messages stay aligned when
//! the file is tailed. Parsing is a two-state line scanner: it waits for a
//! line that opens an entry, then accumulates continuation lines until the
//! next opening line.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::entry::{LogEntry, Severity};
use crate::time_fmt::{format_timestamp, parse_timestamp, TIMESTAMP_WIDTH};

/// Width of the `"[timestamp] "` prefix.
pub const CONTINUATION_WIDTH: usize = TIMESTAMP_WIDTH + 3;

/// Indentation written after every interior newline of an entry's text.
pub const CONTINUATION: &str = "                             ";

const _: () = assert!(CONTINUATION.len() == CONTINUATION_WIDTH);

/// Errors produced while decoding log text.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid timestamp '{timestamp}' on line {line}: {source}")]
    InvalidTimestamp {
        line: usize,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Serialize one entry, including its terminating newline.
pub fn serialize(entry: &LogEntry) -> String {
    let text = entry.text();
    let mut line = String::with_capacity(CONTINUATION_WIDTH + entry.severity().as_str().len() + text.len() + 4);

    line.push('[');
    line.push_str(&format_timestamp(&entry.timestamp()));
    line.push_str("] ");

    if !entry.severity().is_none() {
        line.push('[');
        line.push_str(entry.severity().as_str());
        line.push_str("] ");
    }

    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            line.push('\n');
            line.push_str(CONTINUATION);
        }
        line.push_str(part);
    }

    line.push('\n');
    line
}

/// Serialize entries back to back, in order.
pub fn serialize_all<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> String {
    entries.into_iter().map(serialize).collect()
}

/// The pieces of a line that opens an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Raw bracketed timestamp, not yet validated as a date-time.
    pub timestamp: &'a str,
    pub severity: &'a str,
    /// First line of the entry text.
    pub text: &'a str,
}

/// Recognize a line of the form `[<date> <time>]( [<severity>])? <text>`.
///
/// `<date>` is made of word characters and `-`, `<time>` of word characters,
/// `:` and `.`. Returns `None` for anything else; the timestamp is only
/// checked for shape here.
pub fn scan_marker(line: &str) -> Option<Marker<'_>> {
    let rest = line.strip_prefix('[')?;
    let close = rest.find(']')?;
    let timestamp = &rest[..close];

    let (date, time) = timestamp.split_once(' ')?;
    if !date.chars().all(|c| is_word(c) || c == '-')
        || !time.chars().all(|c| is_word(c) || c == ':' || c == '.')
    {
        return None;
    }

    let after = &rest[close + 1..];
    if after.is_empty() {
        return Some(Marker {
            timestamp,
            severity: "",
            text: "",
        });
    }
    let after = after.strip_prefix(' ')?;

    if let Some((severity, text)) = scan_severity(after) {
        return Some(Marker {
            timestamp,
            severity,
            text,
        });
    }

    Some(Marker {
        timestamp,
        severity: "",
        text: after,
    })
}

fn scan_severity(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix('[')?;
    let close = rest.find(']')?;
    let severity = &rest[..close];
    if !severity.chars().all(is_word) {
        return None;
    }
    let after = &rest[close + 1..];
    if after.is_empty() {
        return Some((severity, ""));
    }
    after.strip_prefix(' ').map(|text| (severity, text))
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Remove the continuation indentation from a follow-on line, if present.
pub fn strip_continuation(line: &str) -> &str {
    line.strip_prefix(CONTINUATION).unwrap_or(line)
}

struct Pending {
    timestamp: NaiveDateTime,
    severity: String,
    text: String,
}

impl Pending {
    fn finish(self) -> LogEntry {
        LogEntry::new(self.timestamp, Severity::from(self.severity), self.text)
    }
}

enum ScanState {
    AwaitingEntry,
    Accumulating(Pending),
}

/// Decode every entry in `text`, in file order.
///
/// Text with no recognizable entries yields an empty vector. Lines before
/// the first entry are ignored. A recognized entry whose timestamp is not a
/// valid date-time aborts the whole batch.
///
/// Line breaks may be `\n` or `\r\n`, so a `\r` that ends a line of entry
/// text is read back as part of the break and dropped.
pub fn parse_all(text: &str) -> Result<Vec<LogEntry>, CodecError> {
    let mut entries = Vec::new();
    let mut state = ScanState::AwaitingEntry;

    for (index, line) in text.lines().enumerate() {
        if let Some(marker) = scan_marker(line) {
            let timestamp =
                parse_timestamp(marker.timestamp).map_err(|source| CodecError::InvalidTimestamp {
                    line: index + 1,
                    timestamp: marker.timestamp.to_string(),
                    source,
                })?;
            let next = ScanState::Accumulating(Pending {
                timestamp,
                severity: marker.severity.to_string(),
                text: marker.text.to_string(),
            });
            if let ScanState::Accumulating(done) = std::mem::replace(&mut state, next) {
                entries.push(done.finish());
            }
            continue;
        }

        if let ScanState::Accumulating(pending) = &mut state {
            pending.text.push('\n');
            pending.text.push_str(strip_continuation(line));
        }
    }

    if let ScanState::Accumulating(done) = state {
        entries.push(done.finish());
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
