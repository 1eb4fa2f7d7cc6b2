// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `plog write`, `plog clear`, `plog path`: commands that touch the live file.

use std::io::Read;

use anyhow::{bail, Result};
use clap::Args;
use plog_core::{serialize, Clock, LogEntry, Severity};
use plog_storage::PluginLog;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct WriteArgs {
    /// Entry text, joined with spaces (read from stdin when omitted)
    pub text: Vec<String>,

    /// Severity tag: DEBUG, INFO, WARNING, ERROR, HTTP or any word
    #[arg(short, long, value_parser = parse_severity, default_value = "")]
    pub severity: Severity,

    /// Parse the text as JSON and store it compactly
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Leave the file empty instead of writing a "Log cleared!" entry
    #[arg(long)]
    pub no_notice: bool,
}

pub fn write<C: Clock>(args: WriteArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    let text = if args.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf.trim_end_matches(['\r', '\n']).to_string()
    } else {
        args.text.join(" ")
    };

    let entry = if args.json {
        let value: serde_json::Value = serde_json::from_str(&text)?;
        log.write_json(&value, args.severity)?
    } else {
        log.write(&text, args.severity)?
    };

    print_written(&entry, format)
}

fn print_written(entry: &LogEntry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", serialize(entry)),
        OutputFormat::Json => print_json(entry)?,
    }
    Ok(())
}

pub fn clear<C: Clock>(args: ClearArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    let with_notice = !args.no_notice;
    log.clear(with_notice)?;

    match format {
        OutputFormat::Text => println!("Log cleared"),
        OutputFormat::Json => print_json(&serde_json::json!({
            "cleared": true,
            "notice": with_notice,
        }))?,
    }
    Ok(())
}

pub fn path<C: Clock>(log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    let path = log.path()?;

    match format {
        OutputFormat::Text => println!("{}", path.display()),
        OutputFormat::Json => print_json(&serde_json::json!({ "path": path }))?,
    }
    Ok(())
}

/// Severity tags are bracketed words, so only word characters are accepted.
pub(crate) fn parse_severity(s: &str) -> Result<Severity> {
    if !s.chars().all(|c| c.is_alphanumeric() || c == '_') {
        bail!("severity must be a single word, got '{}'", s);
    }
    Ok(Severity::new(s.to_uppercase()))
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
