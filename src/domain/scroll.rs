// SPDX-License-Identifier: MPL-2.0
//! Scroll position handling.
//!
//! Scroll notifications arrive far more often than the page needs to react.
//! [`FrameGate`] keeps only the latest sample until the next animation frame
//! and [`Debouncer`] fires once the notifications have settled.

use super::layout::Span;
use std::time::{Duration, Instant};

/// One scroll notification of the page viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub offset_y: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl ScrollSample {
    /// Largest reachable offset, 0 when the content fits.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scroll progress in percent, 0 when the page does not scroll.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset_y / max * 100.0).clamp(0.0, 100.0)
    }

    /// The visible part of the page.
    #[must_use]
    pub fn viewport(&self) -> Span {
        Span::new(self.offset_y, self.viewport_height)
    }

    /// Converts an absolute target offset into a relative one in `0.0..=1.0`.
    #[must_use]
    pub fn relative_offset(&self, target: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (target / max).clamp(0.0, 1.0)
    }
}

/// Holds the most recent value until the next frame takes it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGate<T> {
    pending: Option<T>,
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameGate<T> {
    /// Stores `value`, replacing any earlier pending one.
    ///
    /// Returns `true` when the gate was empty, i.e. a frame must be requested.
    pub fn offer(&mut self, value: T) -> bool {
        self.pending.replace(value).is_none()
    }

    /// Takes the pending value, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Trailing-edge debounce: fires once no poke arrived for `wait`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Restarts the wait.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns `true` exactly once per settled burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Scroll-derived presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    sample: ScrollSample,
    navbar_scrolled: bool,
    progress: f32,
    parallax: f32,
}

impl ScrollState {
    /// Applies a sample.
    ///
    /// The parallax offset only follows the page while `about` intersects
    /// the viewport; otherwise it keeps its last value.
    pub fn apply(&mut self, sample: ScrollSample, threshold: f32, about: Span, factor: f32) {
        self.sample = sample;
        self.navbar_scrolled = sample.offset_y > threshold;
        self.progress = sample.progress_percent();
        if about.intersects(&sample.viewport()) {
            self.parallax = sample.offset_y * factor;
        }
    }

    #[must_use]
    pub fn sample(&self) -> ScrollSample {
        self.sample
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn parallax(&self) -> f32 {
        self.parallax
    }
}
