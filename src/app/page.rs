// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven page state: geometry, scroll position, reveals, the
//! navigation transition and the startup preloader.

use crate::config::{
    Config, GRID_REVEAL_BOTTOM_MARGIN_PX, GRID_REVEAL_THRESHOLD, PARALLAX_FACTOR,
    PRELOADER_FADE_MS, PRELOADER_HOLD_MS, REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD,
    TRANSITION_FADE_MS,
};
use crate::domain::layout::{fit_columns, LayoutInput, PageLayout, Section};
use crate::domain::portfolio::Portfolio;
use crate::domain::reveal::{Entrances, RevealRule, RevealState};
use crate::domain::scroll::{Debouncer, FrameGate, ScrollSample, ScrollState};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::navbar::COMPACT_BREAKPOINT;
use iced::Size;
use std::time::{Duration, Instant};

/// Presentation state that follows the window and the scroll position.
#[derive(Debug, Clone)]
pub struct PageState {
    pub layout: PageLayout,
    pub scroll: ScrollState,
    /// Latest scroll sample not yet handled by a frame.
    pub pending: FrameGate<ScrollSample>,
    pub debouncer: Debouncer,
    pub reveal: RevealState,
    pub entrances: Entrances,
    pub window: Size,
    pub menu_open: bool,
    preloader_started: Option<Instant>,
    transition_started: Option<Instant>,
    max_columns: u16,
    scrolled_threshold: f32,
    transition: Duration,
}

impl PageState {
    pub fn new(config: &Config, window: Size, portfolio: &Portfolio) -> Self {
        let reveal = RevealState::new(
            RevealRule {
                threshold: REVEAL_THRESHOLD,
                bottom_margin: REVEAL_BOTTOM_MARGIN_PX,
            },
            RevealRule {
                threshold: GRID_REVEAL_THRESHOLD,
                bottom_margin: GRID_REVEAL_BOTTOM_MARGIN_PX,
            },
            config.gallery.reveal_settings(),
        );
        let max_columns = config.gallery.column_count();

        let mut page = Self {
            layout: compute_layout(window, max_columns, portfolio),
            scroll: ScrollState::default(),
            pending: FrameGate::default(),
            debouncer: Debouncer::new(config.scroll.debounce()),
            reveal,
            entrances: Entrances::default(),
            window,
            menu_open: false,
            preloader_started: None,
            transition_started: None,
            max_columns,
            scrolled_threshold: config.navigation.scrolled_threshold(),
            transition: config.navigation.transition(),
        };
        let sample = page.current_sample();
        page.apply_sample(sample, portfolio, Instant::now());
        page
    }

    /// Recomputes the geometry after the window or the active grid changed.
    pub fn relayout(&mut self, portfolio: &Portfolio, now: Instant) {
        self.layout = compute_layout(self.window, self.max_columns, portfolio);
        let sample = self.current_sample();
        self.apply_sample(sample, portfolio, now);
    }

    /// The current offset against the current geometry.
    #[must_use]
    pub fn current_sample(&self) -> ScrollSample {
        let viewport_height = self.window.height;
        let content_height = self.layout.content_height();
        let max_offset = (content_height - viewport_height).max(0.0);
        ScrollSample {
            offset_y: self.scroll.sample().offset_y.clamp(0.0, max_offset),
            content_height,
            viewport_height,
        }
    }

    /// Updates navbar, progress, parallax and reveal flags from `sample`.
    pub fn apply_sample(&mut self, sample: ScrollSample, portfolio: &Portfolio, now: Instant) {
        self.scroll.apply(
            sample,
            self.scrolled_threshold,
            self.layout.section_span(Section::About),
            PARALLAX_FACTOR,
        );
        self.reveal
            .update(&self.layout, portfolio.active_tab(), sample.viewport(), now);
    }

    /// Relative offset that brings `section` just below the navbar.
    #[must_use]
    pub fn scroll_target(&self, section: Section, nav_offset: f32) -> f32 {
        let target = self.layout.scroll_target(section, nav_offset);
        self.current_sample().relative_offset(target)
    }

    pub fn start_transition(&mut self, now: Instant) {
        self.transition_started = Some(now);
    }

    /// Opacity of the transition veil, `None` once it is gone.
    ///
    /// The veil stays opaque for the configured transition time, then fades.
    #[must_use]
    pub fn transition_alpha(&self, now: Instant) -> Option<f32> {
        hold_then_fade(
            self.transition_started?,
            self.transition,
            Duration::from_millis(TRANSITION_FADE_MS),
            now,
        )
    }

    pub fn start_preloader(&mut self, now: Instant) {
        self.preloader_started = Some(now);
    }

    /// Opacity of the startup splash, `None` once it is gone.
    #[must_use]
    pub fn preloader_alpha(&self, now: Instant) -> Option<f32> {
        hold_then_fade(
            self.preloader_started?,
            Duration::from_millis(PRELOADER_HOLD_MS),
            Duration::from_millis(PRELOADER_FADE_MS),
            now,
        )
    }

    /// Drops finished animations. Returns `true` while any still runs.
    pub fn settle(&mut self, now: Instant) -> bool {
        if self.transition_alpha(now).is_none() {
            self.transition_started = None;
        }
        if self.preloader_alpha(now).is_none() {
            self.preloader_started = None;
        }
        self.entrances
            .prune(now, self.reveal_entrance_duration());
        self.has_veil() || !self.entrances.is_empty()
    }

    /// Whether some animation needs redraws; `cards` is the number of
    /// rendered gallery cards.
    #[must_use]
    pub fn is_animating(&self, cards: usize, now: Instant) -> bool {
        self.has_veil() || !self.entrances.is_empty() || self.reveal.is_animating(cards, now)
    }

    fn has_veil(&self) -> bool {
        self.transition_started.is_some() || self.preloader_started.is_some()
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.window.width < COMPACT_BREAKPOINT
    }

    #[must_use]
    pub fn reveal_entrance_duration(&self) -> Duration {
        self.reveal.settings().entrance
    }
}

/// Full opacity for `hold`, then a linear fade over `fade`.
fn hold_then_fade(started: Instant, hold: Duration, fade: Duration, now: Instant) -> Option<f32> {
    let elapsed = now.saturating_duration_since(started);
    if elapsed < hold {
        return Some(1.0);
    }
    let fading = elapsed - hold;
    if fading >= fade {
        return None;
    }
    Some(1.0 - fading.as_secs_f32() / fade.as_secs_f32())
}

fn compute_layout(window: Size, max_columns: u16, portfolio: &Portfolio) -> PageLayout {
    let grid_width = window.width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * spacing::XL;
    let tab = portfolio.active_tab();
    PageLayout::compute(LayoutInput {
        viewport_height: window.height,
        columns: fit_columns(grid_width, max_columns),
        active_tab: tab,
        visible_count: portfolio.set(tab).visible_count(),
    })
}
