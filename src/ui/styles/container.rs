// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternate section background (about, contact).
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Fixed navbar; transparent at the top of the page, solid once scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let base = colors.surface_primary;
        let alpha = if scrolled { opacity::SURFACE } else { 0.6 };
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            text_color: Some(colors.text_primary),
            shadow: if scrolled { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Rounded card surface used by gallery and video cards.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Placeholder drawn where a media file is missing.
pub fn missing_media(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.missing_media)),
        text_color: Some(colors.text_tertiary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Track of the scroll progress bar.
pub fn progress_track(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        ..Default::default()
    }
}

/// Filled part of the scroll progress bar.
pub fn progress_fill(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        ..Default::default()
    }
}

/// Collapsed hamburger menu panel.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
