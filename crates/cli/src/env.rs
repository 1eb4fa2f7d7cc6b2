// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Plugin root used when `--root` is not given.
pub const PLUGIN_ROOT_VAR: &str = "PLOG_PLUGIN_ROOT";

pub fn plugin_root() -> Option<PathBuf> {
    std::env::var_os(PLUGIN_ROOT_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Resolve the plugin root: --root > PLOG_PLUGIN_ROOT > current directory
pub fn resolve_root(flag: Option<PathBuf>) -> std::io::Result<PathBuf> {
    match flag.or_else(plugin_root) {
        Some(root) => Ok(root),
        None => std::env::current_dir(),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
