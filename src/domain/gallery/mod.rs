// SPDX-License-Identifier: MPL-2.0
//! Gallery item sets and the category filter.
//!
//! - [`Category`], [`MediaRef`], [`GalleryItem`]: value objects
//! - [`ItemSet`]: one panel's items plus its category selection
//! - [`apply_filter`]: visibility pass over an item slice

mod filter;
mod types;

pub use filter::{apply_filter, FilterOutcome, ItemSet};
pub use types::{Category, GalleryItem, MediaRef};
