// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a native portfolio showcase built with the Iced GUI framework.
//!
//! A TOML manifest describes the profile and two portfolio panels (a
//! photography gallery and UGC video cards). The app renders them as one
//! scrollable page with category filters, a lightbox viewer and a contact
//! form whose submission is simulated.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ui;
