// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the log store

use std::path::PathBuf;

use plog_core::{CodecError, PluginError};
use thiserror::Error;

/// Errors that can occur reading, writing, or rotating plugin logs
#[derive(Debug, Error)]
pub enum LogError {
    #[error("plugin not initialized: {0}")]
    PluginNotInitialized(#[from] PluginError),
    #[error("log file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("malformed log: {0}")]
    Format(#[from] CodecError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
