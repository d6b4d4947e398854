// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal animations.
//!
//! A target is revealed while enough of it is inside the viewport and
//! concealed again as soon as it leaves, so scrolling back re-triggers the
//! animation. Nothing is queued: every update recomputes the flags from the
//! current viewport.

use super::layout::{PageLayout, Section, Span};
use super::tabs::TabId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timing of reveal and entrance animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSettings {
    /// Delay between consecutive gallery cards.
    pub stagger: Duration,
    /// Fade-in duration of a single element.
    pub entrance: Duration,
}

/// An element that fades in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    AboutImage,
    AboutContent,
    SectionTitle(Section),
    PortfolioSubtitle,
    PortfolioTabs,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 7] = [
        RevealTarget::AboutImage,
        RevealTarget::AboutContent,
        RevealTarget::SectionTitle(Section::About),
        RevealTarget::SectionTitle(Section::Portfolio),
        RevealTarget::SectionTitle(Section::Contact),
        RevealTarget::PortfolioSubtitle,
        RevealTarget::PortfolioTabs,
    ];
}

/// Fraction of `target` inside `viewport` once `bottom_margin` is cut off
/// the viewport's bottom edge.
#[must_use]
pub fn intersection_ratio(target: Span, viewport: Span, bottom_margin: f32) -> f32 {
    if target.height <= 0.0 {
        return 0.0;
    }
    let root = Span::new(viewport.top, viewport.height - bottom_margin);
    target.overlap(&root) / target.height
}

/// When a target counts as inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRule {
    pub threshold: f32,
    pub bottom_margin: f32,
}

impl RevealRule {
    #[must_use]
    pub fn is_met(&self, target: Span, viewport: Span) -> bool {
        let ratio = intersection_ratio(target, viewport, self.bottom_margin);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Which elements are revealed and since when.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    target_rule: RevealRule,
    grid_rule: RevealRule,
    settings: RevealSettings,
    revealed: HashMap<RevealTarget, Instant>,
    grid_entered_at: Option<Instant>,
}

impl RevealState {
    #[must_use]
    pub fn new(target_rule: RevealRule, grid_rule: RevealRule, settings: RevealSettings) -> Self {
        Self {
            target_rule,
            grid_rule,
            settings,
            revealed: HashMap::new(),
            grid_entered_at: None,
        }
    }

    /// Recomputes every flag for the given viewport.
    ///
    /// Gallery cards only stagger in while the gallery panel is active.
    pub fn update(&mut self, layout: &PageLayout, active_tab: TabId, viewport: Span, now: Instant) {
        for target in RevealTarget::ALL {
            if self.target_rule.is_met(layout.target_span(target), viewport) {
                self.revealed.entry(target).or_insert(now);
            } else {
                self.revealed.remove(&target);
            }
        }

        let grid_in_view =
            active_tab == TabId::Gallery && self.grid_rule.is_met(layout.grid_span(), viewport);
        if !grid_in_view {
            self.grid_entered_at = None;
        } else if self.grid_entered_at.is_none() {
            self.grid_entered_at = Some(now);
        }
    }

    /// Fade progress of `target` in `0.0..=1.0`.
    #[must_use]
    pub fn target_progress(&self, target: RevealTarget, now: Instant) -> f32 {
        self.revealed
            .get(&target)
            .map_or(0.0, |since| self.fade(*since, now))
    }

    /// Fade progress of the card at `rank`, its index among rendered cards.
    #[must_use]
    pub fn card_progress(&self, rank: usize, now: Instant) -> f32 {
        self.card_start(rank)
            .map_or(0.0, |start| self.fade(start, now))
    }

    #[must_use]
    pub fn settings(&self) -> RevealSettings {
        self.settings
    }

    #[must_use]
    pub fn grid_in_view(&self) -> bool {
        self.grid_entered_at.is_some()
    }

    /// Returns `true` while some fade has not finished.
    #[must_use]
    pub fn is_animating(&self, card_count: usize, now: Instant) -> bool {
        let targets = self
            .revealed
            .values()
            .any(|since| self.fade(*since, now) < 1.0);
        let cards = card_count > 0
            && self.grid_in_view()
            && self.card_progress(card_count - 1, now) < 1.0;
        targets || cards
    }

    fn card_start(&self, rank: usize) -> Option<Instant> {
        let delay = self
            .settings
            .stagger
            .saturating_mul(u32::try_from(rank).unwrap_or(u32::MAX));
        self.grid_entered_at.map(|entered| entered + delay)
    }

    fn fade(&self, start: Instant, now: Instant) -> f32 {
        fade_progress(start, now, self.settings.entrance)
    }
}

fn fade_progress(start: Instant, now: Instant, duration: Duration) -> f32 {
    if now < start {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    (now.duration_since(start).as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Entrance animations of cards made visible by a filter change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entrances {
    started: HashMap<(TabId, usize), Instant>,
}

impl Entrances {
    /// Starts an entrance for each position of `tab`.
    pub fn start(&mut self, tab: TabId, positions: &[usize], now: Instant) {
        for position in positions {
            self.started.insert((tab, *position), now);
        }
    }

    /// Opacity of the card, 1.0 when it has no running entrance.
    #[must_use]
    pub fn progress(&self, tab: TabId, position: usize, now: Instant, duration: Duration) -> f32 {
        self.started
            .get(&(tab, position))
            .map_or(1.0, |start| fade_progress(*start, now, duration))
    }

    /// Forgets finished entrances.
    pub fn prune(&mut self, now: Instant, duration: Duration) {
        self.started
            .retain(|_, start| fade_progress(*start, now, duration) < 1.0);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.started.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::LayoutInput;

    const TARGETS: RevealRule = RevealRule {
        threshold: 0.2,
        bottom_margin: 50.0,
    };
    const GRID: RevealRule = RevealRule {
        threshold: 0.1,
        bottom_margin: 100.0,
    };

    fn settings() -> RevealSettings {
        RevealSettings {
            stagger: Duration::from_millis(100),
            entrance: Duration::from_millis(500),
        }
    }

    fn layout() -> PageLayout {
        PageLayout::compute(LayoutInput {
            viewport_height: 800.0,
            columns: 3,
            active_tab: TabId::Gallery,
            visible_count: 6,
        })
    }

    /// Whether a fade has begun shortly after `now`.
    fn revealed(state: &RevealState, target: RevealTarget, now: Instant) -> bool {
        state.target_progress(target, now + Duration::from_millis(1)) > 0.0
    }

    fn card_started(state: &RevealState, rank: usize, now: Instant) -> bool {
        state.card_progress(rank, now + Duration::from_millis(1)) > 0.0
    }

    #[test]
    fn ratio_accounts_for_bottom_margin() {
        let viewport = Span::new(0.0, 1000.0);
        // 100 px of the target lie in 900..1000, the excluded margin is 50.
        let target = Span::new(900.0, 100.0);
        assert!((intersection_ratio(target, viewport, 50.0) - 0.5).abs() < 1e-6);
        assert_eq!(intersection_ratio(target, viewport, 100.0), 0.0);
    }

    #[test]
    fn degenerate_target_never_intersects() {
        let viewport = Span::new(0.0, 1000.0);
        assert_eq!(intersection_ratio(Span::new(10.0, 0.0), viewport, 0.0), 0.0);
    }

    #[test]
    fn rule_needs_threshold() {
        let viewport = Span::new(0.0, 1000.0);
        assert!(!TARGETS.is_met(Span::new(940.0, 100.0), viewport));
        assert!(TARGETS.is_met(Span::new(900.0, 100.0), viewport));
    }

    #[test]
    fn targets_reveal_on_enter_and_conceal_on_leave() {
        let layout = layout();
        let mut state = RevealState::new(TARGETS, GRID, settings());
        let now = Instant::now();

        state.update(&layout, TabId::Gallery, Span::new(0.0, 800.0), now);
        assert!(!revealed(&state, RevealTarget::AboutImage, now));

        let about = layout.section_top(Section::About);
        state.update(&layout, TabId::Gallery, Span::new(about, 800.0), now);
        assert!(revealed(&state, RevealTarget::AboutImage, now));
        assert!(revealed(&state, RevealTarget::SectionTitle(Section::About), now));

        state.update(&layout, TabId::Gallery, Span::new(0.0, 800.0), now);
        assert!(!revealed(&state, RevealTarget::AboutImage, now));
    }

    #[test]
    fn repeated_updates_keep_reveal_start() {
        let layout = layout();
        let mut state = RevealState::new(TARGETS, GRID, settings());
        let start = Instant::now();
        let about = Span::new(layout.section_top(Section::About), 800.0);

        state.update(&layout, TabId::Gallery, about, start);
        state.update(&layout, TabId::Gallery, about, start + Duration::from_millis(250));
        let progress =
            state.target_progress(RevealTarget::AboutImage, start + Duration::from_millis(250));
        assert!((progress - 0.5).abs() < 1e-3);
    }

    #[test]
    fn grid_cards_stagger_in() {
        let layout = layout();
        let mut state = RevealState::new(TARGETS, GRID, settings());
        let start = Instant::now();
        let grid = Span::new(layout.grid_span().top - 200.0, 800.0);

        state.update(&layout, TabId::Gallery, grid, start);
        assert!(state.grid_in_view());
        assert!(card_started(&state, 0, start));
        assert!(!card_started(&state, 1, start));
        assert!(card_started(&state, 1, start + Duration::from_millis(100)));
        assert!(!card_started(&state, 3, start + Duration::from_millis(250)));
    }

    #[test]
    fn leaving_grid_clears_cards() {
        let layout = layout();
        let mut state = RevealState::new(TARGETS, GRID, settings());
        let start = Instant::now();
        let grid = Span::new(layout.grid_span().top - 200.0, 800.0);

        state.update(&layout, TabId::Gallery, grid, start);
        state.update(&layout, TabId::Gallery, Span::new(0.0, 800.0), start);
        assert!(!state.grid_in_view());
        assert!(!card_started(&state, 0, start + Duration::from_secs(5)));
    }

    #[test]
    fn ugc_panel_does_not_stagger() {
        let layout = layout();
        let mut state = RevealState::new(TARGETS, GRID, settings());
        let grid = Span::new(layout.grid_span().top - 200.0, 800.0);
        state.update(&layout, TabId::Ugc, grid, Instant::now());
        assert!(!state.grid_in_view());
    }

    #[test]
    fn entrances_fade_and_prune() {
        let start = Instant::now();
        let duration = Duration::from_millis(500);
        let mut entrances = Entrances::default();
        entrances.start(TabId::Gallery, &[1, 2], start);

        assert_eq!(entrances.progress(TabId::Gallery, 1, start, duration), 0.0);
        assert_eq!(entrances.progress(TabId::Gallery, 0, start, duration), 1.0);
        assert_eq!(entrances.progress(TabId::Ugc, 1, start, duration), 1.0);

        entrances.prune(start + Duration::from_millis(100), duration);
        assert!(!entrances.is_empty());
        entrances.prune(start + duration, duration);
        assert!(entrances.is_empty());
    }
}
