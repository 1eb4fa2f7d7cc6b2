// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! plog-core: entry model, text codec, and collaborator seams for the plugin log

pub mod clock;
pub mod codec;
pub mod entry;
pub mod plugin;
pub mod time_fmt;

pub use clock::{Clock, FakeClock, SystemClock};
pub use codec::{parse_all, serialize, serialize_all, CodecError};
pub use entry::{LogEntry, Severity};
pub use plugin::{DataDir, PluginError, PluginRoot};
pub use time_fmt::{format_date, format_timestamp, parse_date, parse_timestamp};
