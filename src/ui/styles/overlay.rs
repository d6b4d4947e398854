// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox, the page transition and card badges.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn indicator_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn indicator_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for small indicators like the lightbox counter and the
/// playing badge of video cards.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(indicator_background())),
        text_color: Some(WHITE),
        border: Border {
            color: indicator_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind the lightbox image.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        ..Default::default()
    }
}

/// Page transition veil; `alpha` fades it out.
pub fn transition(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha.clamp(0.0, 1.0),
                ..colors.surface_primary
            })),
            ..Default::default()
        }
    }
}
