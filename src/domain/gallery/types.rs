// SPDX-License-Identifier: MPL-2.0
//! Value objects of the portfolio galleries.

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Category
// =============================================================================

/// A category tag such as `wedding` or `portrait`.
///
/// The tag [`Category::ALL`] is the reserved wildcard that matches every
/// item. Tags compare exactly; surrounding whitespace is trimmed on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Reserved wildcard tag.
    pub const ALL: &'static str = "all";

    /// Creates a category from a tag, trimming surrounding whitespace.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_string())
    }

    /// The wildcard category.
    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if an item tagged `item_tag` is shown under this selection.
    #[must_use]
    pub fn admits(&self, item_tag: &Category) -> bool {
        self.is_all() || self == item_tag
    }

    /// Human-readable label for category controls (`wedding` -> `Wedding`).
    #[must_use]
    pub fn label(&self) -> String {
        self.0
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Media Reference
// =============================================================================

/// Reference to an image or video file shown by the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name for captions and diagnostics.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.to_string_lossy().into_owned())
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// =============================================================================
// Gallery Item
// =============================================================================

/// One card of an item set.
///
/// Built once from the manifest. The only field that changes afterwards is
/// `visible`, and only the category filter writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub category: Category,
    /// Image shown in the grid and the lightbox, or the video of a UGC card.
    pub media: MediaRef,
    /// Still image shown for video cards.
    pub poster: Option<MediaRef>,
    pub title: String,
    /// Whether the referenced file was found when the manifest was loaded.
    pub available: bool,
    pub(crate) visible: bool,
}

impl GalleryItem {
    /// Creates a visible item.
    pub fn new(category: Category, media: MediaRef, title: impl Into<String>) -> Self {
        Self {
            category,
            media,
            poster: None,
            title: title.into(),
            available: true,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_poster(mut self, poster: MediaRef) -> Self {
        self.poster = Some(poster);
        self
    }

    #[must_use]
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
