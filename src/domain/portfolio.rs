// SPDX-License-Identifier: MPL-2.0
//! Portfolio state: both item sets, the active tab and the lightbox session.

use super::gallery::{Category, FilterOutcome, ItemSet, MediaRef};
use super::lightbox::{LightboxSession, OpenError, Transition};
use super::tabs::{TabController, TabId};

/// Filter resets performed by a tab switch, one entry per panel.
pub type TabResets = Vec<(TabId, FilterOutcome)>;

/// The portfolio section's interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Portfolio {
    tabs: TabController,
    gallery: ItemSet,
    ugc: ItemSet,
    lightbox: LightboxSession,
}

impl Portfolio {
    #[must_use]
    pub fn new(gallery: ItemSet, ugc: ItemSet) -> Self {
        Self {
            tabs: TabController::default(),
            gallery,
            ugc,
            lightbox: LightboxSession::Closed,
        }
    }

    #[must_use]
    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    #[must_use]
    pub fn active_tab(&self) -> TabId {
        self.tabs.active()
    }

    #[must_use]
    pub fn set(&self, tab: TabId) -> &ItemSet {
        match tab {
            TabId::Gallery => &self.gallery,
            TabId::Ugc => &self.ugc,
        }
    }

    fn set_mut(&mut self, tab: TabId) -> &mut ItemSet {
        match tab {
            TabId::Gallery => &mut self.gallery,
            TabId::Ugc => &mut self.ugc,
        }
    }

    /// Switches panels and resets every panel's category to the wildcard.
    ///
    /// Returns `None` when `id` is already active; nothing changes then.
    pub fn activate_tab(&mut self, id: TabId) -> Option<TabResets> {
        if !self.tabs.activate(id) {
            return None;
        }
        Some(
            TabId::ALL
                .into_iter()
                .map(|tab| (tab, self.set_mut(tab).reset()))
                .collect(),
        )
    }

    /// Applies a category to the item set of `tab`.
    pub fn select_category(&mut self, tab: TabId, tag: Category) -> FilterOutcome {
        self.set_mut(tab).select(tag)
    }

    /// Opens the lightbox on a gallery image.
    pub fn open_lightbox(&mut self, image: &MediaRef) -> Result<Transition, OpenError> {
        self.lightbox.open(&self.gallery, image)
    }

    /// Opens the lightbox on the gallery item at `position`.
    pub fn open_lightbox_at(&mut self, position: usize) -> Option<Result<Transition, OpenError>> {
        let media = self.gallery.get(position)?.media.clone();
        Some(self.open_lightbox(&media))
    }

    #[must_use]
    pub fn lightbox(&self) -> &LightboxSession {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut LightboxSession {
        &mut self.lightbox
    }
}
