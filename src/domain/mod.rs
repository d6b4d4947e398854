// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the portfolio's interaction rules without any UI code.
//!
//! Nothing here depends on Iced. Time is passed in as [`std::time::Instant`]
//! values so every timed behavior can be tested deterministically.
//!
//! # Modules
//!
//! - [`gallery`]: Items, categories and the category filter ([`ItemSet`](gallery::ItemSet))
//! - [`lightbox`]: Lightbox navigation ([`LightboxSession`](lightbox::LightboxSession))
//! - [`tabs`]: Portfolio panels ([`TabController`](tabs::TabController))
//! - [`portfolio`]: Both panels, the active tab and the lightbox
//! - [`layout`]: Page geometry ([`PageLayout`](layout::PageLayout))
//! - [`scroll`]: Scroll samples, frame gating and debouncing
//! - [`reveal`]: Scroll-triggered reveal and entrance animations
//! - [`contact`]: Contact form validation and the simulated submission
//! - [`video`]: Click-to-play state of the UGC cards

pub mod contact;
pub mod gallery;
pub mod layout;
pub mod lightbox;
pub mod portfolio;
pub mod reveal;
pub mod scroll;
pub mod tabs;
pub mod video;
