// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording user activity and non-fatal problems.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`DiagnosticEvent`]: A user action or warning with its timestamps
//! - [`ActivityLog`]: Bounded event store that echoes warnings to stderr

mod buffer;
mod events;
mod log;

pub use buffer::CircularBuffer;
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningKind,
};
pub use log::ActivityLog;
