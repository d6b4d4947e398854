// SPDX-License-Identifier: MPL-2.0
//! Static page sections: hero, about, footer, plus the scroll progress bar,
//! the page transition veil and the startup preloader drawn above them.
//!
//! Every section renders at exactly the height [`PageLayout`] assigns to it.

use crate::domain::layout::{
    PageLayout, Section, ABOUT_BODY_HEIGHT, ABOUT_HEIGHT, FOOTER_HEIGHT, SECTION_PADDING,
    SECTION_TITLE_HEIGHT,
};
use crate::domain::reveal::{RevealState, RevealTarget};
use crate::manifest::Profile;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};
use std::time::Instant;

/// Distance (px) a revealed element travels while fading in.
const REVEAL_SHIFT: f32 = 30.0;

/// Messages emitted by the static sections.
#[derive(Debug, Clone)]
pub enum Message {
    /// Hero call-to-action and scroll hint.
    ScrollTo(Section),
}

/// Text color faded by `alpha`.
fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Wraps `content` so it slides up while `progress` goes from 0 to 1.
pub fn revealed<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    progress: f32,
    height: f32,
) -> Element<'a, M> {
    let shift = (1.0 - progress.clamp(0.0, 1.0)) * REVEAL_SHIFT;
    Container::new(
        Column::new()
            .push(Space::new().height(Length::Fixed(shift)))
            .push(content),
    )
    .height(Length::Fixed(height))
    .width(Length::Fill)
    .clip(true)
    .into()
}

/// Section heading in the brand color.
pub fn section_title<'a, M: 'a>(label: &'a str, progress: f32) -> Element<'a, M> {
    let title = Text::new(label)
        .size(typography::TITLE_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(ColorScheme::for_theme(theme).text_primary, progress)),
        });
    revealed(
        Container::new(title).center_x(Length::Fill),
        progress,
        SECTION_TITLE_HEIGHT,
    )
}

/// Full-viewport welcome section.
pub fn hero<'a>(profile: &'a Profile, layout: &PageLayout) -> Element<'a, Message> {
    let name = Text::new(profile.name.as_str())
        .size(typography::DISPLAY)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_primary),
        });

    let tagline = Text::new(profile.tagline.as_str())
        .size(typography::TITLE_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });

    let cta = button(Text::new("Get in Touch").size(typography::BODY_LG))
        .on_press(Message::ScrollTo(Section::Contact))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let hint = button(Text::new("Scroll ↓").size(typography::BODY_SM))
        .on_press(Message::ScrollTo(Section::About))
        .style(styles::button::nav_link);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(name)
        .push(tagline)
        .push(cta);

    Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(
                Container::new(content)
                    .center(Length::Fill)
                    .height(Length::Fill),
            )
            .push(Container::new(hint).padding(spacing::LG)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout.hero_height()))
    .style(styles::container::page)
    .into()
}

/// About section: portrait with parallax and the biography.
pub fn about<'a, M: 'a>(
    profile: &'a Profile,
    reveal: &RevealState,
    parallax: f32,
    now: Instant,
) -> Element<'a, M> {
    let image_progress = reveal.target_progress(RevealTarget::AboutImage, now);
    let content_progress = reveal.target_progress(RevealTarget::AboutContent, now);
    let title_progress = reveal.target_progress(RevealTarget::SectionTitle(Section::About), now);

    let available = profile.portrait_available;
    let portrait: Element<'a, M> = match profile.portrait.as_ref().filter(|_| available) {
        Some(path) => image::Image::new(Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::PORTRAIT_WIDTH))
            .height(Length::Fixed(ABOUT_BODY_HEIGHT - REVEAL_SHIFT))
            .opacity(image_progress)
            .into(),
        None => Container::new(Text::new("Image not available").size(typography::BODY_SM))
            .center(Length::Fixed(sizing::PORTRAIT_WIDTH))
            .height(Length::Fixed(ABOUT_BODY_HEIGHT - REVEAL_SHIFT))
            .style(styles::container::missing_media)
            .into(),
    };

    let portrait = Container::new(
        Column::new()
            .push(Space::new().height(Length::Fixed(parallax.max(0.0))))
            .push(portrait),
    )
    .width(Length::Fixed(sizing::PORTRAIT_WIDTH))
    .height(Length::Fixed(ABOUT_BODY_HEIGHT))
    .clip(true);

    let biography = Text::new(profile.about.as_str())
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(
                ColorScheme::for_theme(theme).text_secondary,
                content_progress,
            )),
        });

    let body = Row::new()
        .spacing(spacing::XXL)
        .push(revealed(portrait, image_progress, ABOUT_BODY_HEIGHT))
        .push(revealed(biography, content_progress, ABOUT_BODY_HEIGHT));

    Container::new(
        Column::new()
            .push(Space::new().height(Length::Fixed(SECTION_PADDING)))
            .push(section_title(Section::About.label(), title_progress))
            .push(
                Container::new(body)
                    .max_width(sizing::CONTENT_MAX_WIDTH)
                    .height(Length::Fixed(ABOUT_BODY_HEIGHT)),
            )
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(ABOUT_HEIGHT))
    .style(styles::container::band)
    .into()
}

pub fn footer<'a, M: 'a>(name: &'a str) -> Element<'a, M> {
    Container::new(
        Text::new(format!("© {name}"))
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).text_tertiary),
            }),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(FOOTER_HEIGHT))
    .style(styles::container::band)
    .into()
}

/// Thin bar at the top of the window showing the scroll position.
pub fn progress_bar<'a, M: 'a>(percent: f32) -> Element<'a, M> {
    let filled = (percent.clamp(0.0, 100.0) * 10.0).round() as u16;
    let mut row = Row::new().height(Length::Fixed(sizing::PROGRESS_BAR));
    if filled > 0 {
        row = row.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::progress_fill),
        );
    }
    if filled < 1000 {
        row = row.push(Space::new().width(Length::FillPortion(1000 - filled)));
    }
    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::progress_track)
        .into()
}

/// Veil covering the page during a navigation jump; `alpha` fades it out.
pub fn transition_veil<'a, M: 'a>(alpha: f32) -> Element<'a, M> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::transition(alpha))
        .into()
}

/// Startup splash: the brand name on a full-window veil, both faded by `alpha`.
pub fn preloader<'a, M: 'a>(brand: &str, alpha: f32) -> Element<'a, M> {
    Container::new(
        Text::new(brand.to_uppercase())
            .size(typography::TITLE_SM)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(ColorScheme::for_theme(theme).text_secondary, alpha)),
            }),
    )
    .center(Length::Fill)
    .style(styles::overlay::transition(alpha))
    .into()
}

/// Shared empty-state text.
pub fn hint<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).text_tertiary),
            }),
    )
    .center(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_alpha_and_clamps() {
        let base = Color::from_rgba(1.0, 0.0, 0.0, 0.8);
        assert_eq!(faded(base, 0.5).a, 0.4);
        assert_eq!(faded(base, 2.0).a, 0.8);
        assert_eq!(faded(base, -1.0).a, 0.0);
    }
}
