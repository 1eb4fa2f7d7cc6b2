// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! plog - plugin log CLI

mod commands;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{archive, query, write};
use plog_core::PluginRoot;
use plog_storage::PluginLog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plog",
    version,
    about = "Plugin log - write, query and rotate a plugin's append-only log"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Plugin root directory (must contain data/) [env: PLOG_PLUGIN_ROOT]
    #[arg(long, value_name = "DIR", global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append an entry to the live log
    Write(write::WriteArgs),
    /// Clear the live log
    Clear(write::ClearArgs),
    /// Print the live log path, creating the file if missing
    Path,
    /// Slice the live log by entry index
    Lines(query::LinesArgs),
    /// Show the last entries of the live log
    Tail(query::TailArgs),
    /// Show a single entry by index
    Line(query::LineArgs),
    /// Show the first entry of the live log
    First,
    /// Show the last entry of the live log
    Last,
    /// Show entries in a time window across archives and the live log
    Between(query::BetweenArgs),
    /// Move every entry older than today into per-day archives
    Rotate,
    /// List the days that have an archive
    Days,
    /// Show the entries stored for one day
    Show(archive::ShowArgs),
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays parseable.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let root = env::resolve_root(cli.root)?;
    let log = PluginLog::open(&PluginRoot::initialize(root)?)?;
    tracing::debug!(data_dir = %log.layout().data_dir.display(), "opened plugin log");

    match command {
        Commands::Write(args) => write::write(args, &log, format),
        Commands::Clear(args) => write::clear(args, &log, format),
        Commands::Path => write::path(&log, format),
        Commands::Lines(args) => query::lines(args, &log, format),
        Commands::Tail(args) => query::tail(args, &log, format),
        Commands::Line(args) => query::line(args, &log, format),
        Commands::First => query::first(&log, format),
        Commands::Last => query::last(&log, format),
        Commands::Between(args) => query::between(args, &log, format),
        Commands::Rotate => archive::rotate(&log, format),
        Commands::Days => archive::days(&log, format),
        Commands::Show(args) => archive::show(args, &log, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
