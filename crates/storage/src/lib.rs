// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Append-only plugin log store: live file, queries, and day archives

mod archive;
mod error;
mod live;
pub mod log_paths;
mod plugin_log;
mod query;

#[cfg(test)]
mod test_helpers;

pub use archive::Archiver;
pub use error::LogError;
pub use live::{LiveLog, CLEARED_NOTICE, CREATED_NOTICE};
pub use log_paths::LogLayout;
pub use plugin_log::PluginLog;
pub use query::LogQuery;
