// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,

    /// Placeholder shown where an image file is missing.
    pub missing_media: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::CREAM_50,
            surface_secondary: palette::CREAM_100,
            surface_tertiary: palette::CREAM_200,

            text_primary: palette::ESPRESSO_900,
            text_secondary: palette::ESPRESSO_700,
            text_tertiary: palette::TAUPE_500,

            brand_primary: palette::GOLD_500,
            brand_secondary: palette::GOLD_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
            missing_media: palette::CREAM_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::ESPRESSO_900,
            surface_secondary: palette::ESPRESSO_800,
            surface_tertiary: palette::ESPRESSO_700,

            text_primary: palette::CREAM_50,
            text_secondary: palette::CREAM_200,
            text_tertiary: palette::TAUPE_500,

            brand_primary: palette::GOLD_300,
            brand_secondary: palette::GOLD_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
            missing_media: palette::ESPRESSO_700,
        }
    }

    /// Scheme matching an Iced theme produced by [`ThemeMode::theme`].
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// The Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
