// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox drawn above the page.
//!
//! Presses on the dimmed backdrop close it; presses on the image or the
//! controls never reach the backdrop.

use crate::domain::lightbox::Viewing;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Size};

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone)]
pub enum Message {
    BackdropPressed,
    Previous,
    Next,
    Close,
}

pub struct ViewContext<'a> {
    pub viewing: &'a Viewing,
    pub window: Size,
}

fn control<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .center(Length::Fixed(sizing::ICON_XL)),
    )
    .on_press(message)
    .padding(0)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let max_width = ctx.window.width * sizing::LIGHTBOX_IMAGE_RATIO;
    let max_height = ctx.window.height * sizing::LIGHTBOX_IMAGE_RATIO;

    let picture = image::Image::new(Handle::from_path(ctx.viewing.current().path()))
        .content_fit(ContentFit::Contain)
        .width(Length::Fixed(max_width.max(1.0)))
        .height(Length::Fixed(max_height.max(1.0)));

    let counter = Container::new(Text::new(ctx.viewing.counter()).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL));

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(control("‹", Message::Previous))
        .push(opaque(picture))
        .push(control("›", Message::Next));

    let close = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(opaque(control("✕", Message::Close)));

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(stage)
        .push(opaque(counter));

    let layers = Column::new()
        .padding(spacing::LG)
        .push(close)
        .push(Container::new(content).center(Length::Fill));

    mouse_area(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed)
    .into()
}
