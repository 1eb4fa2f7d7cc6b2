// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only commands over the live log and its archives.

use anyhow::{anyhow, Result};
use chrono::{NaiveDateTime, NaiveTime};
use clap::Args;
use plog_core::{parse_date, parse_timestamp, Clock};
use plog_storage::PluginLog;

use crate::output::{print_entries, print_entry, OutputFormat};

#[derive(Args)]
pub struct LinesArgs {
    /// Zero-based index of the first entry (negative counts from the end)
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// Number of entries; 0 reads to the end, negative reads backwards from start
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    pub count: i64,
}

#[derive(Args)]
pub struct TailArgs {
    /// Number of entries to show (0 shows all)
    #[arg(default_value_t = 10)]
    pub n: i64,
}

#[derive(Args)]
pub struct LineArgs {
    /// Zero-based entry index (negative counts from the end)
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

#[derive(Args)]
pub struct BetweenArgs {
    /// Window start, inclusive ("YYYY-MM-DD" or "YYYY-MM-DD HH:MM:SS[.ffffff]")
    #[arg(value_parser = parse_when)]
    pub start: NaiveDateTime,

    /// Window end, exclusive (defaults to now)
    #[arg(value_parser = parse_when)]
    pub end: Option<NaiveDateTime>,
}

pub fn lines<C: Clock>(args: LinesArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    print_entries(&log.lines(args.start, args.count)?, format)
}

pub fn tail<C: Clock>(args: TailArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    print_entries(&log.tail(args.n)?, format)
}

pub fn line<C: Clock>(args: LineArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    print_entry(log.line(args.index)?.as_ref(), format)
}

pub fn first<C: Clock>(log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    print_entry(log.first()?.as_ref(), format)
}

pub fn last<C: Clock>(log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    print_entry(log.last()?.as_ref(), format)
}

pub fn between<C: Clock>(args: BetweenArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    print_entries(&log.between(args.start, args.end)?, format)
}

/// A full timestamp, or a bare date meaning its midnight.
pub(crate) fn parse_when(s: &str) -> Result<NaiveDateTime> {
    if let Ok(ts) = parse_timestamp(s) {
        return Ok(ts);
    }
    let date = parse_date(s.trim())
        .map_err(|_| anyhow!("invalid time '{}': expected YYYY-MM-DD [HH:MM:SS]", s))?;
    Ok(date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
