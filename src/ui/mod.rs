// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! renders from borrowed state and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! # Page
//!
//! - [`navbar`] - Fixed navigation bar with hamburger menu
//! - [`sections`] - Hero, about, footer, progress bar and transition veil
//! - [`portfolio`] - Tabs, category bar and card grid
//! - [`contact`] - Contact form
//! - [`lightbox`] - Full-window image viewer
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color schemes and Light/Dark/System theme mode

pub mod contact;
pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod sections;
pub mod styles;
pub mod theming;
