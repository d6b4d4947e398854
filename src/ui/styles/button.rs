// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action button (hero CTA, submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            text_color: Color { a: 0.85, ..WHITE },
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Plain text link in the navbar; gold while hovered.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        _ => colors.text_primary,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the selected tab or category control.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_secondary,
        _ => colors.brand_primary,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_secondary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for the other tab and category controls.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (colors.surface_tertiary, colors.brand_primary)
        }
        _ => (colors.surface_secondary, colors.surface_tertiary),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Transparent wrapper around clickable cards.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: ColorScheme::for_theme(theme).text_primary,
        border: Border::default(),
        shadow: match status {
            button::Status::Hovered => shadow::LG,
            _ => shadow::NONE,
        },
        snap: true,
    }
}

/// Style for round controls drawn over dark overlays (lightbox arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_HOVER,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
