// SPDX-License-Identifier: MPL-2.0
//! Category filtering of item sets.
//!
//! Filtering only toggles visibility flags: items are never removed or
//! reordered, so positions stay stable across filter changes and the
//! lightbox can rebuild its list from the flags alone.

use super::types::{Category, GalleryItem, MediaRef};

/// What a filter pass changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Positions that went from hidden to shown (entrance animation targets).
    pub shown: Vec<usize>,
    /// Positions that went from shown to hidden.
    pub hidden: Vec<usize>,
    /// Number of visible items after the pass.
    pub visible_count: usize,
}

impl FilterOutcome {
    /// Returns `true` if no visibility flag changed.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }
}

/// Sets `visible = tag.admits(item.category)` on every item.
///
/// Unknown tags and empty slices are not errors: they simply leave nothing
/// visible.
pub fn apply_filter(tag: &Category, items: &mut [GalleryItem]) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for (position, item) in items.iter_mut().enumerate() {
        let visible = tag.admits(&item.category);
        match (item.visible, visible) {
            (false, true) => outcome.shown.push(position),
            (true, false) => outcome.hidden.push(position),
            _ => {}
        }
        item.visible = visible;
        if visible {
            outcome.visible_count += 1;
        }
    }

    outcome
}

/// The items of one portfolio panel together with its category selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemSet {
    items: Vec<GalleryItem>,
    selection: Category,
}

impl ItemSet {
    /// Creates a set with every item visible and the wildcard selected.
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let mut set = Self {
            items,
            selection: Category::all(),
        };
        apply_filter(&set.selection, &mut set.items);
        set
    }

    /// Selects a category and applies it.
    pub fn select(&mut self, tag: Category) -> FilterOutcome {
        self.selection = tag;
        apply_filter(&self.selection, &mut self.items)
    }

    /// Resets the selection to the wildcard.
    pub fn reset(&mut self) -> FilterOutcome {
        self.select(Category::all())
    }

    #[must_use]
    pub fn selection(&self) -> &Category {
        &self.selection
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&GalleryItem> {
        self.items.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Category controls: the wildcard first, then each distinct tag in
    /// order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = vec![Category::all()];
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Visible items with their positions, in rendered order.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &GalleryItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_visible())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_visible()).count()
    }

    /// Media of the visible items, in rendered order.
    #[must_use]
    pub fn visible_media(&self) -> Vec<MediaRef> {
        self.visible().map(|(_, item)| item.media.clone()).collect()
    }
}
