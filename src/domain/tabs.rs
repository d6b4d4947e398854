// SPDX-License-Identifier: MPL-2.0
//! Portfolio tabs: exactly one panel is active at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a portfolio panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    /// Photography gallery (opens in the lightbox).
    #[default]
    Gallery,
    /// User-generated video content.
    Ugc,
}

impl TabId {
    /// Every tab in display order.
    pub const ALL: [TabId; 2] = [TabId::Gallery, TabId::Ugc];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Gallery => "gallery",
            TabId::Ugc => "ugc",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tab button and whether it is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub is_active: bool,
}

/// Tracks the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabController {
    active: TabId,
}

impl TabController {
    #[must_use]
    pub fn new(active: TabId) -> Self {
        Self { active }
    }

    #[must_use]
    pub fn active(&self) -> TabId {
        self.active
    }

    /// Makes `id` the active tab. Returns `false` if it already was.
    pub fn activate(&mut self, id: TabId) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id;
        true
    }

    /// Tabs in display order with their active flags.
    #[must_use]
    pub fn tabs(&self) -> [Tab; 2] {
        TabId::ALL.map(|id| Tab {
            id,
            is_active: id == self.active,
        })
    }
}
