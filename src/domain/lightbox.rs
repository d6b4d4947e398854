// SPDX-License-Identifier: MPL-2.0
//! Lightbox session: full-size viewing of the visible gallery images.
//!
//! The navigable list is rebuilt from the item set's visibility flags every
//! time the lightbox opens, so it always reflects the active category.
//! While the session is open the list is non-empty and the index is in
//! bounds; every transition preserves that.

use std::fmt;

use super::gallery::{ItemSet, MediaRef};

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Where a click inside the lightbox overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image, the caption, or one of the controls.
    Content,
}

/// Observable effect of a lightbox operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// The session opened (or reopened with a fresh list).
    Opened,
    /// The displayed image changed or was redisplayed.
    Moved,
    /// The session closed.
    Closed,
}

/// The lightbox could not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// The requested image is not among the visible items.
    NotVisible(MediaRef),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::NotVisible(media) => {
                write!(f, "{} is not in the visible gallery", media)
            }
        }
    }
}

/// An open lightbox: the navigable images and the displayed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewing {
    images: Vec<MediaRef>,
    index: usize,
}

impl Viewing {
    #[must_use]
    pub fn images(&self) -> &[MediaRef] {
        &self.images
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &MediaRef {
        &self.images[self.index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`: an open session has at least one image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Counter shown under the image, e.g. `2 / 5`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    fn step_forward(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    fn step_backward(&mut self) {
        let len = self.images.len();
        self.index = (self.index + len - 1) % len;
    }
}

/// The single lightbox session of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxSession {
    #[default]
    Closed,
    Open(Viewing),
}

impl LightboxSession {
    /// Opens on `image`, rebuilding the list from the visible items of `set`.
    ///
    /// Reopening while open replaces the list. If `image` is not visible the
    /// session is left untouched.
    pub fn open(&mut self, set: &ItemSet, image: &MediaRef) -> Result<Transition, OpenError> {
        let images = set.visible_media();
        let index = images
            .iter()
            .position(|candidate| candidate == image)
            .ok_or_else(|| OpenError::NotVisible(image.clone()))?;

        *self = LightboxSession::Open(Viewing { images, index });
        Ok(Transition::Opened)
    }

    /// Shows the following image, wrapping from the last to the first.
    pub fn next(&mut self) -> Transition {
        match self {
            LightboxSession::Open(viewing) => {
                viewing.step_forward();
                Transition::Moved
            }
            LightboxSession::Closed => Transition::Unchanged,
        }
    }

    /// Shows the preceding image, wrapping from the first to the last.
    pub fn previous(&mut self) -> Transition {
        match self {
            LightboxSession::Open(viewing) => {
                viewing.step_backward();
                Transition::Moved
            }
            LightboxSession::Closed => Transition::Unchanged,
        }
    }

    pub fn close(&mut self) -> Transition {
        match self {
            LightboxSession::Open(_) => {
                *self = LightboxSession::Closed;
                Transition::Closed
            }
            LightboxSession::Closed => Transition::Unchanged,
        }
    }

    /// Keyboard input. Ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> Transition {
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
        }
    }

    /// Pointer input. Only clicks on the backdrop itself close the session.
    pub fn handle_click(&mut self, target: ClickTarget) -> Transition {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => Transition::Unchanged,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxSession::Open(_))
    }

    /// Background page scrolling is locked while the lightbox is open.
    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    #[must_use]
    pub fn viewing(&self) -> Option<&Viewing> {
        match self {
            LightboxSession::Open(viewing) => Some(viewing),
            LightboxSession::Closed => None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&MediaRef> {
        self.viewing().map(Viewing::current)
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.viewing().map(Viewing::index)
    }
}
