// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the portfolio is browsed,
//! so that warnings can be correlated with what the user was doing.

use std::time::Instant;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::layout::Section;
use crate::domain::tabs::TabId;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Page Navigation
    // ==========================================================================
    /// Scroll the page to a section (nav link, CTA, or scroll hint).
    NavigateTo { section: Section },

    /// Open or close the hamburger menu.
    ToggleMenu,

    // ==========================================================================
    // Portfolio
    // ==========================================================================
    /// Switch the active portfolio tab.
    ActivateTab { tab: TabId },

    /// Apply a category filter to one tab's item set.
    SelectCategory { tab: TabId, category: String },

    // ==========================================================================
    // Lightbox
    // ==========================================================================
    /// Open the lightbox on an image.
    OpenLightbox {
        /// Position of the image in the navigable list.
        index: usize,
        /// Length of the navigable list.
        len: usize,
    },

    LightboxNext,

    LightboxPrevious,

    CloseLightbox,

    // ==========================================================================
    // UGC Videos
    // ==========================================================================
    /// Toggle playback of a video card.
    TogglePlayback { card: usize },

    // ==========================================================================
    // Contact Form
    // ==========================================================================
    /// Submit the contact form.
    SubmitContact {
        /// Whether validation accepted the form.
        accepted: bool,
    },
}

/// Categories of non-fatal problems worth recording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The settings file existed but could not be read.
    ConfigUnreadable,
    /// The portfolio manifest is missing or malformed.
    ManifestUnavailable,
    /// A manifest entry points at a file that does not exist.
    MediaMissing,
    /// The lightbox was asked to open an image that is not visible.
    LightboxTargetMissing,
    /// A video card could not be started, not even muted.
    PlaybackRefused,
}

/// A warning with its user-facing description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub kind: WarningKind,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
}

/// A diagnostic event with both clocks attached.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for ordering and durations).
    pub timestamp: Instant,
    /// Wall-clock time, used when echoing to stderr.
    pub recorded_at: DateTime<Local>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Local::now(),
            kind,
        }
    }

    /// Returns the warning carried by this event, if any.
    #[must_use]
    pub fn as_warning(&self) -> Option<&WarningEvent> {
        match &self.kind {
            DiagnosticEventKind::Warning { event } => Some(event),
            DiagnosticEventKind::UserAction { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_action_tag() {
        let action = UserAction::SelectCategory {
            tab: TabId::Gallery,
            category: "wedding".to_string(),
        };
        let toml = toml::to_string(&action).expect("serialize");
        assert!(toml.contains("action = \"select_category\""));
        assert!(toml.contains("tab = \"gallery\""));
    }

    #[test]
    fn warning_event_is_exposed_by_as_warning() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningKind::PlaybackRefused, "clip.mp4"),
        });
        let warning = event.as_warning().expect("warning");
        assert_eq!(warning.kind, WarningKind::PlaybackRefused);

        let action = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::LightboxNext,
        });
        assert!(action.as_warning().is_none());
    }
}
