// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar.
//!
//! Wide windows show the section links inline. Below
//! [`COMPACT_BREAKPOINT`] they collapse behind a hamburger button whose
//! dropdown closes on a link press or on a press anywhere outside the bar.

use crate::domain::layout::{Section, NAVBAR_HEIGHT};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Window width below which the links collapse into the hamburger menu.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub brand: &'a str,
    pub menu_open: bool,
    /// The page is scrolled past the navbar threshold.
    pub scrolled: bool,
    /// The window is narrower than [`COMPACT_BREAKPOINT`].
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LinkPressed(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    NavigateTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::LinkPressed(section) => {
            *menu_open = false;
            Event::NavigateTo(section)
        }
    }
}

/// Render the navigation bar (and its dropdown while open).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.brand)
            .size(typography::TITLE_MD)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).brand_primary),
            }),
    )
    .on_press(Message::LinkPressed(Section::Home))
    .padding(0)
    .style(styles::button::nav_link);

    let mut bar = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::XL])
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if ctx.menu_open { "✕" } else { "☰" };
        bar = bar.push(
            button(Text::new(glyph).size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::nav_link),
        );
    } else {
        for section in Section::ALL {
            bar = bar.push(link(section));
        }
    }

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(bar)
            .width(Length::Fill)
            .style(styles::container::navbar(ctx.scrolled)),
    );

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown());
    }

    content.into()
}

fn link<'a>(section: Section) -> Element<'a, Message> {
    button(Text::new(section.label()).size(typography::BODY_LG))
        .on_press(Message::LinkPressed(section))
        .padding([spacing::XS, spacing::XXS])
        .style(styles::button::nav_link)
        .into()
}

fn build_dropdown<'a>() -> Element<'a, Message> {
    let links = Section::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(link(section))
        });

    Container::new(
        Container::new(links)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::menu_panel),
    )
    .padding([0.0, spacing::MD])
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(open);
        update(Message::ToggleMenu, &mut open);
        assert!(!open);
    }

    #[test]
    fn link_press_closes_menu_and_navigates() {
        let mut open = true;
        let event = update(Message::LinkPressed(Section::Contact), &mut open);
        assert_eq!(event, Event::NavigateTo(Section::Contact));
        assert!(!open);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut open = false;
        update(Message::CloseMenu, &mut open);
        assert!(!open);
    }
}
