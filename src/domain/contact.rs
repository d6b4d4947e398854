// SPDX-License-Identifier: MPL-2.0
//! Contact form state and its simulated submission sequence.
//!
//! Submitting never leaves the process. After validation the form goes
//! through a fixed sequence of delayed phases:
//!
//! ```text
//! Idle -> Sending -> Sent -> Resetting -> Idle
//! ```
//!
//! `Sending` ends when the caller reports the outcome of its delayed task.
//! Every later step is driven by [`ContactForm::tick`].

use crate::error::SubmitError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Returns `true` for `local@domain.tld` shaped addresses without whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "✓ Message Sent!";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Delays of the submission sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTimings {
    /// Simulated network latency.
    pub send: Duration,
    /// How long the confirmation stays before fields are cleared.
    pub reset: Duration,
    /// Delay between clearing consecutive fields.
    pub field_stagger: Duration,
    /// Delay after the reset starts before the button is restored.
    pub restore: Duration,
    /// How long an empty field stays highlighted.
    pub error_highlight: Duration,
}

/// A form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

/// Value and error highlight of one input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    value: String,
    error_since: Option<Instant>,
}

impl FieldState {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the trimmed value is non-empty.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.value.trim().is_empty()
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error_since.is_some()
    }

    fn clear(&mut self) {
        self.value.clear();
        self.error_since = None;
    }
}

/// Why a submission was rejected before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// These fields are empty once trimmed.
    EmptyFields(Vec<Field>),
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyFields(_) => f.write_str("Please fill in all fields."),
            ValidationError::InvalidEmail => f.write_str("Please enter a valid email address."),
        }
    }
}

/// Where the form is in its submission sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Sent {
        since: Instant,
    },
    Resetting {
        since: Instant,
        cleared: usize,
    },
}

/// The contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: [FieldState; 3],
    phase: Phase,
    timings: ContactTimings,
}

impl ContactForm {
    #[must_use]
    pub fn new(timings: ContactTimings) -> Self {
        Self {
            fields: Default::default(),
            phase: Phase::Idle,
            timings,
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.fields[field.index()].value = value;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn timings(&self) -> ContactTimings {
        self.timings
    }

    /// The submit button only accepts presses while idle.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => SUBMIT_LABEL,
            Phase::Sending => SENDING_LABEL,
            Phase::Sent { .. } | Phase::Resetting { .. } => SENT_LABEL,
        }
    }

    /// Validates the fields and enters `Sending` on success.
    ///
    /// Empty fields are highlighted until `error_highlight` has elapsed.
    /// Returns `Ok(false)` if a submission is already running.
    pub fn submit(&mut self, now: Instant) -> Result<bool, ValidationError> {
        if !self.can_submit() {
            return Ok(false);
        }

        let empty: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !self.field(*field).has_content())
            .collect();
        if !empty.is_empty() {
            for field in &empty {
                self.fields[field.index()].error_since = Some(now);
            }
            return Err(ValidationError::EmptyFields(empty));
        }

        if !is_valid_email(self.field(Field::Email).value()) {
            return Err(ValidationError::InvalidEmail);
        }

        self.phase = Phase::Sending;
        Ok(true)
    }

    /// Reports the end of the delayed send.
    ///
    /// Returns `true` when the form moved to `Sent`. An aborted send puts
    /// the form back to `Idle` with its contents untouched.
    pub fn finish_sending(&mut self, result: Result<(), SubmitError>, now: Instant) -> bool {
        if self.phase != Phase::Sending {
            return false;
        }
        match result {
            Ok(()) => {
                self.phase = Phase::Sent { since: now };
                true
            }
            Err(SubmitError::Aborted) => {
                self.phase = Phase::Idle;
                false
            }
        }
    }

    /// Advances timed steps. Returns `true` if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        let highlight = self.timings.error_highlight;
        for field in &mut self.fields {
            if field.error_since.is_some_and(|since| now >= since + highlight) {
                field.error_since = None;
                changed = true;
            }
        }

        if let Phase::Sent { since } = self.phase {
            let reset_at = since + self.timings.reset;
            if now >= reset_at {
                self.phase = Phase::Resetting {
                    since: reset_at,
                    cleared: 0,
                };
                changed = true;
            }
        }

        if let Phase::Resetting { since, mut cleared } = self.phase {
            let restore = now >= since + self.timings.restore;
            while cleared < self.fields.len() {
                let due = since
                    + self
                        .timings
                        .field_stagger
                        .saturating_mul(u32::try_from(cleared).unwrap_or(u32::MAX));
                if now < due && !restore {
                    break;
                }
                self.fields[cleared].clear();
                cleared += 1;
                changed = true;
            }
            self.phase = if restore {
                changed = true;
                Phase::Idle
            } else {
                Phase::Resetting { since, cleared }
            };
        }

        changed
    }

    /// Returns `true` while timed steps are outstanding.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        matches!(self.phase, Phase::Sent { .. } | Phase::Resetting { .. })
            || self.fields.iter().any(FieldState::has_error)
    }
}
