// SPDX-License-Identifier: MPL-2.0
//! Click-to-play state of the UGC video cards.
//!
//! At most one card plays at a time. The actual decoding lives behind
//! [`PlaybackHost`], which may refuse to start a card.

use std::fmt;

/// The host declined to start playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackRefused;

impl fmt::Display for PlaybackRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("playback refused")
    }
}

/// Whatever actually plays the media of a card.
pub trait PlaybackHost {
    /// Starts playback of `card`, with or without sound.
    fn start(&mut self, card: usize, muted: bool) -> Result<(), PlaybackRefused>;

    /// Stops playback of `card`. Pausing never fails.
    fn pause(&mut self, card: usize);
}

/// Playback flags of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPlayback {
    pub playing: bool,
    pub muted: bool,
}

impl Default for CardPlayback {
    fn default() -> Self {
        Self {
            playing: false,
            muted: true,
        }
    }
}

/// Result of clicking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The card was playing and is now paused.
    Paused,
    /// The card plays; `muted` tells whether the muted fallback was needed.
    Playing { muted: bool },
    /// Neither unmuted nor muted playback could start.
    Refused(PlaybackRefused),
    /// No card at that index.
    Missing,
}

/// Playback state of every card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoCards {
    cards: Vec<CardPlayback>,
}

impl VideoCards {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            cards: vec![CardPlayback::default(); count],
        }
    }

    #[must_use]
    pub fn get(&self, card: usize) -> Option<CardPlayback> {
        self.cards.get(card).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Toggles playback of `card`.
    ///
    /// Starting a card pauses and mutes every other card first, then tries
    /// unmuted playback and falls back to muted playback.
    pub fn toggle(&mut self, card: usize, host: &mut impl PlaybackHost) -> ToggleOutcome {
        let Some(state) = self.cards.get(card).copied() else {
            return ToggleOutcome::Missing;
        };

        if state.playing {
            self.stop(card, host);
            return ToggleOutcome::Paused;
        }

        for other in 0..self.cards.len() {
            if other != card {
                self.stop(other, host);
            }
        }

        let outcome = match host.start(card, false) {
            Ok(()) => ToggleOutcome::Playing { muted: false },
            Err(_) => match host.start(card, true) {
                Ok(()) => ToggleOutcome::Playing { muted: true },
                Err(refused) => ToggleOutcome::Refused(refused),
            },
        };

        self.cards[card] = match outcome {
            ToggleOutcome::Playing { muted } => CardPlayback {
                playing: true,
                muted,
            },
            _ => CardPlayback::default(),
        };
        outcome
    }

    /// Pauses every card, e.g. when the UGC panel is hidden.
    pub fn pause_all(&mut self, host: &mut impl PlaybackHost) {
        for card in 0..self.cards.len() {
            self.stop(card, host);
        }
    }

    fn stop(&mut self, card: usize, host: &mut impl PlaybackHost) {
        if let Some(state) = self.cards.get_mut(card) {
            if state.playing {
                host.pause(card);
            }
            *state = CardPlayback::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Refuses sound, and refuses everything for cards in `broken`.
    #[derive(Default)]
    struct StrictHost {
        allow_sound: bool,
        broken: Vec<usize>,
        paused: Vec<usize>,
    }

    impl PlaybackHost for StrictHost {
        fn start(&mut self, card: usize, muted: bool) -> Result<(), PlaybackRefused> {
            if self.broken.contains(&card) || (!muted && !self.allow_sound) {
                return Err(PlaybackRefused);
            }
            Ok(())
        }

        fn pause(&mut self, card: usize) {
            self.paused.push(card);
        }
    }

    fn playing(cards: &VideoCards) -> Option<usize> {
        (0..cards.len()).find(|card| cards.get(*card).is_some_and(|c| c.playing))
    }

    #[test]
    fn cards_start_paused_and_muted() {
        let cards = VideoCards::new(2);
        assert_eq!(cards.get(0), Some(CardPlayback::default()));
        assert!(cards.get(0).unwrap().muted);
        assert_eq!(playing(&cards), None);
    }

    #[test]
    fn unmuted_playback_when_allowed() {
        let mut host = StrictHost {
            allow_sound: true,
            ..Default::default()
        };
        let mut cards = VideoCards::new(2);
        assert_eq!(cards.toggle(1, &mut host), ToggleOutcome::Playing { muted: false });
        assert_eq!(playing(&cards), Some(1));
    }

    #[test]
    fn falls_back_to_muted_playback() {
        let mut host = StrictHost::default();
        let mut cards = VideoCards::new(1);
        assert_eq!(cards.toggle(0, &mut host), ToggleOutcome::Playing { muted: true });
        assert!(cards.get(0).unwrap().playing);
    }

    #[test]
    fn starting_one_card_pauses_the_other() {
        let mut host = StrictHost {
            allow_sound: true,
            ..Default::default()
        };
        let mut cards = VideoCards::new(3);
        cards.toggle(0, &mut host);
        cards.toggle(2, &mut host);

        assert_eq!(playing(&cards), Some(2));
        assert_eq!(host.paused, vec![0]);
        assert_eq!(cards.get(0), Some(CardPlayback::default()));
    }

    #[test]
    fn second_click_pauses_and_mutes() {
        let mut host = StrictHost {
            allow_sound: true,
            ..Default::default()
        };
        let mut cards = VideoCards::new(1);
        cards.toggle(0, &mut host);
        assert_eq!(cards.toggle(0, &mut host), ToggleOutcome::Paused);
        assert_eq!(cards.get(0), Some(CardPlayback::default()));
    }

    #[test]
    fn refused_card_stays_paused() {
        let mut host = StrictHost {
            broken: vec![1],
            ..Default::default()
        };
        let mut cards = VideoCards::new(2);
        cards.toggle(0, &mut host);

        assert_eq!(
            cards.toggle(1, &mut host),
            ToggleOutcome::Refused(PlaybackRefused)
        );
        assert_eq!(playing(&cards), None);
    }

    #[test]
    fn unknown_card_is_missing() {
        let mut cards = VideoCards::new(1);
        assert_eq!(
            cards.toggle(5, &mut StrictHost::default()),
            ToggleOutcome::Missing
        );
    }

    #[test]
    fn pause_all_stops_playing_card() {
        let mut host = StrictHost::default();
        let mut cards = VideoCards::new(2);
        cards.toggle(1, &mut host);
        cards.pause_all(&mut host);
        assert_eq!(playing(&cards), None);
        assert_eq!(host.paused, vec![1]);
    }
}
