// SPDX-License-Identifier: MPL-2.0
//! Contact form input styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Form field; gold border while focused or filled, red while flagged.
pub fn field(has_content: bool, has_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let colors = ColorScheme::for_theme(theme);
        let focused = matches!(status, text_input::Status::Focused { .. });
        let border_color = if has_error {
            colors.error
        } else if focused || has_content {
            colors.brand_primary
        } else if matches!(status, text_input::Status::Hovered) {
            colors.text_tertiary
        } else {
            colors.surface_tertiary
        };

        text_input::Style {
            background: Background::Color(colors.surface_primary),
            border: Border {
                color: border_color,
                width: if focused || has_error { 2.0 } else { 1.0 },
                radius: radius::MD.into(),
            },
            icon: colors.text_tertiary,
            placeholder: colors.text_tertiary,
            value: colors.text_primary,
            selection: Color {
                a: 0.3,
                ..colors.brand_primary
            },
        }
    }
}
