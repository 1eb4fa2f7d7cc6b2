// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `plog rotate`, `plog days`, `plog show`: day archives.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use plog_core::{format_date, parse_date, Clock};
use plog_storage::PluginLog;

use crate::output::{print_entries, print_json, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Day to show (YYYY-MM-DD); today reads the live log
    #[arg(value_parser = parse_day)]
    pub date: NaiveDate,
}

pub fn rotate<C: Clock>(log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    let archived = log.rotate()?;

    match format {
        OutputFormat::Text => println!("Archived {} day(s)", archived),
        OutputFormat::Json => print_json(&serde_json::json!({ "archived": archived }))?,
    }
    Ok(())
}

pub fn days<C: Clock>(log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    let days: Vec<String> = log.archived_days()?.iter().map(format_date).collect();

    match format {
        OutputFormat::Text => {
            for day in &days {
                println!("{}", day);
            }
        }
        OutputFormat::Json => print_json(&days)?,
    }
    Ok(())
}

pub fn show<C: Clock>(args: ShowArgs, log: &PluginLog<C>, format: OutputFormat) -> Result<()> {
    let Some(entries) = log.load(args.date)? else {
        bail!("no log stored for {}", format_date(&args.date));
    };
    print_entries(&entries, format)
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    parse_date(s.trim()).map_err(|_| anyhow::anyhow!("invalid date '{}': expected YYYY-MM-DD", s))
}
