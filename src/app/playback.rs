// SPDX-License-Identifier: MPL-2.0
//! Playback host backing the UGC video cards.
//!
//! Frames are not decoded: a started card shows its poster with a playing
//! badge. Cards whose video file was not found refuse to start.

use crate::domain::gallery::ItemSet;
use crate::domain::video::{PlaybackHost, PlaybackRefused};

#[derive(Debug, Clone, Default)]
pub struct FilePlaybackHost {
    available: Vec<bool>,
    active: Option<(usize, bool)>,
}

impl FilePlaybackHost {
    /// One entry per card of `set`, in item order.
    #[must_use]
    pub fn from_set(set: &ItemSet) -> Self {
        Self {
            available: set.items().iter().map(|item| item.available).collect(),
            active: None,
        }
    }
}

impl PlaybackHost for FilePlaybackHost {
    fn start(&mut self, card: usize, muted: bool) -> Result<(), PlaybackRefused> {
        if !self.available.get(card).copied().unwrap_or(false) {
            return Err(PlaybackRefused);
        }
        self.active = Some((card, muted));
        Ok(())
    }

    fn pause(&mut self, card: usize) {
        if self.active.is_some_and(|(active, _)| active == card) {
            self.active = None;
        }
    }
}
