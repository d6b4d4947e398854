// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log with stderr echo for warnings.

use std::fmt::Write as _;

use chrono::Local;

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningKind};
use crate::config::DEFAULT_ACTIVITY_LOG_CAPACITY;

/// Bounded record of user actions and warnings.
///
/// Warnings are also written to stderr as they are recorded, together with
/// the user action that preceded them, unless echo is disabled (tests keep
/// their output quiet that way).
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: CircularBuffer<DiagnosticEvent>,
    echo_warnings: bool,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_LOG_CAPACITY)
    }
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            echo_warnings: true,
        }
    }

    /// Returns a log that never writes to stderr.
    #[must_use]
    pub fn silent(capacity: usize) -> Self {
        Self {
            echo_warnings: false,
            ..Self::new(capacity)
        }
    }

    pub fn record_action(&mut self, action: UserAction) {
        self.events
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action,
            }));
    }

    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(kind, message),
        });
        if self.echo_warnings {
            if let Some(line) = self.warning_line(&event) {
                eprintln!("{line}");
            }
        }
        self.events.push(event);
    }

    /// Stderr line for a warning event, naming the last action before it.
    fn warning_line(&self, event: &DiagnosticEvent) -> Option<String> {
        let warning = event.as_warning()?;
        let mut line = format!(
            "[{}] warning ({:?}): {}",
            event.recorded_at.format("%H:%M:%S%.3f"),
            warning.kind,
            warning.message
        );
        if let Some(action) = self.last_action() {
            let _ = write!(line, " (after {action:?})");
        }
        Some(line)
    }

    /// Retained warnings, oldest first.
    pub fn warnings(&self) -> impl Iterator<Item = &WarningEvent> {
        self.events.iter().filter_map(DiagnosticEvent::as_warning)
    }

    /// Most recently recorded user action.
    #[must_use]
    pub fn last_action(&self) -> Option<&UserAction> {
        self.events.iter().rev().find_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            DiagnosticEventKind::Warning { .. } => None,
        })
    }

    /// One-line account of the retained events, `None` for an empty log.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let warnings = self.warnings().count();
        let mut line = format!(
            "{} actions, {} warnings",
            self.len() - warnings,
            warnings
        );
        if let Some(action) = self.last_action() {
            let _ = write!(line, ", last action {action:?}");
        }
        Some(line)
    }

    /// Writes the summary to stderr when the window closes.
    pub fn report_session(&self) {
        if !self.echo_warnings {
            return;
        }
        if let Some(summary) = self.summary() {
            eprintln!("[{}] session: {summary}", Local::now().format("%H:%M:%S%.3f"));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
