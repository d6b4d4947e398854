// SPDX-License-Identifier: MPL-2.0
//! Deterministic page geometry.
//!
//! Every section of the page is rendered at a fixed height, except the
//! portfolio whose grid grows with the number of visible cards. Knowing the
//! geometry up front lets navigation compute scroll targets and the reveal
//! logic compute intersections without querying the widget tree.

use super::reveal::RevealTarget;
use super::tabs::TabId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Height of the fixed navigation bar.
pub const NAVBAR_HEIGHT: f32 = 80.0;
/// The hero fills the viewport but never gets shorter than this.
pub const MIN_HERO_HEIGHT: f32 = 560.0;
/// Vertical padding above and below every content section.
pub const SECTION_PADDING: f32 = 80.0;
pub const SECTION_TITLE_HEIGHT: f32 = 64.0;
/// Height of the about portrait and its text column.
pub const ABOUT_BODY_HEIGHT: f32 = 480.0;
pub const PORTFOLIO_SUBTITLE_HEIGHT: f32 = 40.0;
pub const PORTFOLIO_TABS_HEIGHT: f32 = 56.0;
pub const CATEGORY_BAR_HEIGHT: f32 = 56.0;
pub const GALLERY_CARD_HEIGHT: f32 = 320.0;
pub const UGC_CARD_HEIGHT: f32 = 440.0;
/// Gap between grid rows and columns.
pub const GRID_GAP: f32 = 24.0;
/// Height of the "nothing in this category" placeholder.
pub const EMPTY_GRID_HEIGHT: f32 = 120.0;
pub const CONTACT_FORM_HEIGHT: f32 = 520.0;
pub const FOOTER_HEIGHT: f32 = 96.0;
/// Narrowest card the grid lays out before dropping a column.
pub const MIN_CARD_WIDTH: f32 = 260.0;

pub const ABOUT_HEIGHT: f32 =
    SECTION_PADDING + SECTION_TITLE_HEIGHT + ABOUT_BODY_HEIGHT + SECTION_PADDING;
pub const CONTACT_HEIGHT: f32 =
    SECTION_PADDING + SECTION_TITLE_HEIGHT + CONTACT_FORM_HEIGHT + SECTION_PADDING;
const PORTFOLIO_HEADER_HEIGHT: f32 = SECTION_PADDING
    + SECTION_TITLE_HEIGHT
    + PORTFOLIO_SUBTITLE_HEIGHT
    + PORTFOLIO_TABS_HEIGHT
    + CATEGORY_BAR_HEIGHT;

/// A page section reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Navigation link label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A vertical extent in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Length of the overlap with `other`, 0 when they are disjoint.
    #[must_use]
    pub fn overlap(&self, other: &Span) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }

    /// Strict intersection test: touching edges do not count.
    #[must_use]
    pub fn intersects(&self, other: &Span) -> bool {
        self.top < other.bottom() && self.bottom() > other.top
    }
}

/// Number of grid columns that fit `width`, at most `max_columns`.
#[must_use]
pub fn fit_columns(width: f32, max_columns: u16) -> u16 {
    let fitting = ((width + GRID_GAP) / (MIN_CARD_WIDTH + GRID_GAP)).floor();
    if fitting.is_finite() && fitting >= 1.0 {
        (fitting.min(f32::from(u16::MAX)) as u16).min(max_columns).max(1)
    } else {
        1
    }
}

/// Inputs that change the page geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub viewport_height: f32,
    pub columns: u16,
    pub active_tab: TabId,
    /// Visible items of the active panel.
    pub visible_count: usize,
}

/// Section extents of the whole page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    hero: f32,
    grid: f32,
    card_height: f32,
    columns: usize,
}

impl PageLayout {
    #[must_use]
    pub fn compute(input: LayoutInput) -> Self {
        let columns = usize::from(input.columns.max(1));
        let card_height = match input.active_tab {
            TabId::Gallery => GALLERY_CARD_HEIGHT,
            TabId::Ugc => UGC_CARD_HEIGHT,
        };
        let rows = input.visible_count.div_ceil(columns);
        let grid = if rows == 0 {
            EMPTY_GRID_HEIGHT
        } else {
            rows as f32 * card_height + (rows - 1) as f32 * GRID_GAP
        };

        Self {
            hero: input.viewport_height.max(MIN_HERO_HEIGHT),
            grid,
            card_height,
            columns,
        }
    }

    #[must_use]
    pub fn hero_height(&self) -> f32 {
        self.hero
    }

    #[must_use]
    pub fn grid_height(&self) -> f32 {
        self.grid
    }

    #[must_use]
    pub fn card_height(&self) -> f32 {
        self.card_height
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn section_height(&self, section: Section) -> f32 {
        match section {
            Section::Home => self.hero,
            Section::About => ABOUT_HEIGHT,
            Section::Portfolio => PORTFOLIO_HEADER_HEIGHT + self.grid + SECTION_PADDING,
            Section::Contact => CONTACT_HEIGHT,
        }
    }

    #[must_use]
    pub fn section_top(&self, section: Section) -> f32 {
        Section::ALL
            .iter()
            .take_while(|s| **s != section)
            .map(|s| self.section_height(*s))
            .sum()
    }

    #[must_use]
    pub fn section_span(&self, section: Section) -> Span {
        Span::new(self.section_top(section), self.section_height(section))
    }

    /// Total scrollable height including the footer.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        Section::ALL
            .iter()
            .map(|s| self.section_height(*s))
            .sum::<f32>()
            + FOOTER_HEIGHT
    }

    /// Offset that puts the top of `section` just below the navbar.
    #[must_use]
    pub fn scroll_target(&self, section: Section, nav_offset: f32) -> f32 {
        (self.section_top(section) - nav_offset).max(0.0)
    }

    /// Extent of the grid of the active panel.
    #[must_use]
    pub fn grid_span(&self) -> Span {
        Span::new(
            self.section_top(Section::Portfolio) + PORTFOLIO_HEADER_HEIGHT,
            self.grid,
        )
    }

    /// Extent of a reveal target.
    #[must_use]
    pub fn target_span(&self, target: RevealTarget) -> Span {
        let body_top = |section| {
            self.section_top(section) + SECTION_PADDING + SECTION_TITLE_HEIGHT
        };
        match target {
            RevealTarget::SectionTitle(section) => Span::new(
                self.section_top(section) + SECTION_PADDING,
                SECTION_TITLE_HEIGHT,
            ),
            RevealTarget::AboutImage | RevealTarget::AboutContent => {
                Span::new(body_top(Section::About), ABOUT_BODY_HEIGHT)
            }
            RevealTarget::PortfolioSubtitle => {
                Span::new(body_top(Section::Portfolio), PORTFOLIO_SUBTITLE_HEIGHT)
            }
            RevealTarget::PortfolioTabs => Span::new(
                body_top(Section::Portfolio) + PORTFOLIO_SUBTITLE_HEIGHT,
                PORTFOLIO_TABS_HEIGHT,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(visible_count: usize) -> PageLayout {
        PageLayout::compute(LayoutInput {
            viewport_height: 800.0,
            columns: 3,
            active_tab: TabId::Gallery,
            visible_count,
        })
    }

    #[test]
    fn sections_stack_in_page_order() {
        let layout = layout(6);
        assert_eq!(layout.section_top(Section::Home), 0.0);
        assert_eq!(layout.section_top(Section::About), 800.0);
        assert_eq!(layout.section_top(Section::Portfolio), 800.0 + ABOUT_HEIGHT);
        assert_eq!(
            layout.section_top(Section::Contact),
            layout.section_span(Section::Portfolio).bottom()
        );
    }

    #[test]
    fn hero_never_shrinks_below_minimum() {
        let layout = PageLayout::compute(LayoutInput {
            viewport_height: 200.0,
            columns: 3,
            active_tab: TabId::Gallery,
            visible_count: 0,
        });
        assert_eq!(layout.hero_height(), MIN_HERO_HEIGHT);
    }

    #[test]
    fn grid_height_follows_visible_rows() {
        assert_eq!(layout(3).grid_height(), GALLERY_CARD_HEIGHT);
        assert_eq!(
            layout(4).grid_height(),
            2.0 * GALLERY_CARD_HEIGHT + GRID_GAP
        );
        assert_eq!(layout(0).grid_height(), EMPTY_GRID_HEIGHT);
    }

    #[test]
    fn filtering_moves_contact_up() {
        let all = layout(9).section_top(Section::Contact);
        let few = layout(2).section_top(Section::Contact);
        assert!(few < all);
    }

    #[test]
    fn scroll_target_subtracts_offset_and_clamps() {
        let layout = layout(3);
        assert_eq!(layout.scroll_target(Section::About, 80.0), 720.0);
        assert_eq!(layout.scroll_target(Section::Home, 80.0), 0.0);
    }

    #[test]
    fn zero_columns_behave_like_one() {
        let layout = PageLayout::compute(LayoutInput {
            viewport_height: 800.0,
            columns: 0,
            active_tab: TabId::Ugc,
            visible_count: 2,
        });
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.grid_height(), 2.0 * UGC_CARD_HEIGHT + GRID_GAP);
    }

    #[test]
    fn targets_lie_inside_their_sections() {
        let layout = layout(3);
        let about = layout.section_span(Section::About);
        let image = layout.target_span(RevealTarget::AboutImage);
        assert!(image.top >= about.top && image.bottom() <= about.bottom());

        let portfolio = layout.section_span(Section::Portfolio);
        let tabs = layout.target_span(RevealTarget::PortfolioTabs);
        assert!(tabs.top > portfolio.top && tabs.bottom() < layout.grid_span().top);
    }

    #[test]
    fn span_overlap_and_intersection() {
        let a = Span::new(0.0, 100.0);
        let b = Span::new(50.0, 100.0);
        let c = Span::new(100.0, 10.0);
        assert_eq!(a.overlap(&b), 50.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.overlap(&c), 0.0);
    }

    #[test]
    fn fit_columns_drops_columns_on_narrow_windows() {
        assert_eq!(fit_columns(1200.0, 3), 3);
        assert_eq!(fit_columns(600.0, 3), 2);
        assert_eq!(fit_columns(200.0, 3), 1);
        assert_eq!(fit_columns(0.0, 3), 1);
    }
}
