// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use plog_core::{serialize, serialize_all, LogEntry};
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render entries in their on-disk form, or as a JSON array.
pub fn format_entries(entries: &[LogEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(serialize_all(entries)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
    }
}

/// Render a single optional entry; a missing entry is `null` in JSON and
/// nothing in text.
pub fn format_entry(entry: Option<&LogEntry>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(entry.map(serialize).unwrap_or_default()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&entry)?)),
    }
}

pub fn print_entries(entries: &[LogEntry], format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", format_entries(entries, format)?);
    Ok(())
}

pub fn print_entry(entry: Option<&LogEntry>, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", format_entry(entry, format)?);
    Ok(())
}

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
