// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for timings and thresholds
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Navigation**: Scrolled-navbar threshold, section offset, page transition,
//!   startup preloader
//! - **Gallery**: Grid columns, reveal stagger, filter entrance animation
//! - **Reveal**: Viewport intersection thresholds and margins
//! - **Contact**: Simulated submission timings
//! - **Scroll**: Debounce window and parallax factor

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll offset (px) past which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f32 = 100.0;

/// Height (px) of the fixed navbar subtracted from section tops when scrolling.
pub const DEFAULT_SECTION_OFFSET_PX: f32 = 80.0;

/// Maximum allowed section offset.
pub const MAX_SECTION_OFFSET_PX: f32 = 400.0;

/// How long the page transition overlay stays visible (ms).
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Maximum page transition duration (ms).
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// Fade-out of the page transition veil once its hold time is over (ms).
pub const TRANSITION_FADE_MS: u64 = 500;

/// How long the startup preloader stays fully opaque (ms).
pub const PRELOADER_HOLD_MS: u64 = 1_000;

/// Fade-out of the startup preloader (ms).
pub const PRELOADER_FADE_MS: u64 = 500;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of gallery cards per row.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 3;

/// Minimum number of gallery cards per row.
pub const MIN_GALLERY_COLUMNS: u16 = 1;

/// Maximum number of gallery cards per row.
pub const MAX_GALLERY_COLUMNS: u16 = 6;

/// Delay between consecutive gallery cards when the grid is revealed (ms).
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;

/// Maximum reveal stagger (ms).
pub const MAX_REVEAL_STAGGER_MS: u64 = 1_000;

/// Duration of the entrance animation of a card shown by a filter (ms).
pub const DEFAULT_ENTRANCE_MS: u64 = 500;

/// Maximum entrance animation duration (ms).
pub const MAX_ENTRANCE_MS: u64 = 5_000;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Visible fraction a reveal target needs before it animates in.
pub const REVEAL_THRESHOLD: f32 = 0.2;

/// Bottom viewport margin (px) excluded when revealing targets.
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0;

/// Visible fraction the gallery grid needs before its cards animate in.
pub const GRID_REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom viewport margin (px) excluded when revealing the gallery grid.
pub const GRID_REVEAL_BOTTOM_MARGIN_PX: f32 = 100.0;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Simulated network latency of a form submission (ms).
pub const DEFAULT_SEND_DELAY_MS: u64 = 2_000;

/// Time the "sent" confirmation stays before the form is cleared (ms).
pub const DEFAULT_RESET_DELAY_MS: u64 = 2_000;

/// Delay between clearing consecutive form fields (ms).
pub const DEFAULT_FIELD_STAGGER_MS: u64 = 100;

/// Delay after the reset starts before the submit button is restored (ms).
pub const DEFAULT_RESTORE_DELAY_MS: u64 = 1_000;

/// How long an empty field keeps its error highlight (ms).
pub const DEFAULT_ERROR_HIGHLIGHT_MS: u64 = 3_000;

/// Auto-dismiss delay of contact form toasts (ms).
pub const DEFAULT_FORM_TOAST_MS: u64 = 5_000;

/// Upper bound for any contact form timing (ms).
pub const MAX_CONTACT_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Debounce window of the placeholder scroll handler (ms).
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 16;

/// Maximum scroll debounce window (ms).
pub const MAX_SCROLL_DEBOUNCE_MS: u64 = 1_000;

/// Portrait parallax displacement per scrolled pixel.
pub const PARALLAX_FACTOR: f32 = 0.02;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of activity entries retained in memory.
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 500;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Navigation validation
    assert!(DEFAULT_SCROLLED_THRESHOLD_PX >= 0.0);
    assert!(DEFAULT_SECTION_OFFSET_PX >= 0.0);
    assert!(DEFAULT_SECTION_OFFSET_PX <= MAX_SECTION_OFFSET_PX);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(TRANSITION_FADE_MS > 0);
    assert!(PRELOADER_FADE_MS > 0);

    // Gallery validation
    assert!(MIN_GALLERY_COLUMNS > 0);
    assert!(MAX_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS <= MAX_GALLERY_COLUMNS);
    assert!(DEFAULT_ENTRANCE_MS <= MAX_ENTRANCE_MS);
    assert!(DEFAULT_REVEAL_STAGGER_MS <= MAX_REVEAL_STAGGER_MS);

    // Reveal validation
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(GRID_REVEAL_THRESHOLD > 0.0 && GRID_REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_BOTTOM_MARGIN_PX >= 0.0);
    assert!(GRID_REVEAL_BOTTOM_MARGIN_PX >= 0.0);

    // Contact validation
    assert!(DEFAULT_SEND_DELAY_MS <= MAX_CONTACT_DELAY_MS);
    assert!(DEFAULT_RESET_DELAY_MS <= MAX_CONTACT_DELAY_MS);
    assert!(DEFAULT_FIELD_STAGGER_MS <= MAX_CONTACT_DELAY_MS);
    assert!(DEFAULT_RESTORE_DELAY_MS <= MAX_CONTACT_DELAY_MS);
    assert!(DEFAULT_ERROR_HIGHLIGHT_MS <= MAX_CONTACT_DELAY_MS);
    // Every field is cleared before the button comes back.
    assert!(DEFAULT_FIELD_STAGGER_MS * 2 < DEFAULT_RESTORE_DELAY_MS);

    // Scroll validation
    assert!(DEFAULT_SCROLL_DEBOUNCE_MS <= MAX_SCROLL_DEBOUNCE_MS);
    assert!(PARALLAX_FACTOR > 0.0 && PARALLAX_FACTOR < 1.0);

    assert!(DEFAULT_ACTIVITY_LOG_CAPACITY > 0);
};
