//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn plog_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn plog_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("write")
        .stdout_has("lines")
        .stdout_has("between")
        .stdout_has("rotate")
        .stdout_has("clear");
}

#[test]
fn plog_lines_help_shows_usage() {
    cli()
        .args(&["lines", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("<START>");
}

#[test]
fn plog_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
