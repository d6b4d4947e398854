// SPDX-License-Identifier: MPL-2.0
//! Portfolio section: tab buttons, the category bar and the card grid of the
//! active panel.
//!
//! Cards are laid out in rows of [`PageLayout::columns`] at the fixed card
//! height of the active panel, so the rendered grid always matches
//! [`PageLayout::grid_height`].

use crate::domain::gallery::{Category, GalleryItem};
use crate::domain::layout::{
    PageLayout, Section, CATEGORY_BAR_HEIGHT, GRID_GAP, PORTFOLIO_SUBTITLE_HEIGHT,
    PORTFOLIO_TABS_HEIGHT, SECTION_PADDING,
};
use crate::domain::portfolio::Portfolio;
use crate::domain::reveal::{Entrances, RevealState, RevealTarget};
use crate::domain::tabs::TabId;
use crate::domain::video::VideoCards;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::sections::{hint, revealed, section_title};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::widget::{button, text, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use std::time::{Duration, Instant};

const SUBTITLE: &str = "A selection of recent work";

/// Messages emitted by the portfolio section.
#[derive(Debug, Clone)]
pub enum Message {
    TabPressed(TabId),
    CategoryPressed(TabId, Category),
    /// A gallery card was pressed; carries the item position.
    ImagePressed(usize),
    /// A UGC card was pressed; carries the item position.
    VideoPressed(usize),
}

/// Contextual data needed to render the portfolio.
pub struct ViewContext<'a> {
    pub portfolio: &'a Portfolio,
    pub layout: &'a PageLayout,
    pub reveal: &'a RevealState,
    pub entrances: &'a Entrances,
    pub entrance_duration: Duration,
    pub videos: &'a VideoCards,
    pub now: Instant,
}

/// Display name of a tab button.
#[must_use]
pub fn tab_label(tab: TabId) -> &'static str {
    match tab {
        TabId::Gallery => "Photography",
        TabId::Ugc => "UGC Videos",
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let now = ctx.now;
    let title_progress = ctx
        .reveal
        .target_progress(RevealTarget::SectionTitle(Section::Portfolio), now);
    let subtitle_progress = ctx
        .reveal
        .target_progress(RevealTarget::PortfolioSubtitle, now);
    let tabs_progress = ctx.reveal.target_progress(RevealTarget::PortfolioTabs, now);
    let active = ctx.portfolio.active_tab();

    let subtitle = Container::new(Text::new(SUBTITLE).size(typography::BODY_LG).style(
        |theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        },
    ))
    .center_x(Length::Fill);

    let content = Column::new()
        .push(Space::new().height(Length::Fixed(SECTION_PADDING)))
        .push(section_title(Section::Portfolio.label(), title_progress))
        .push(revealed(subtitle, subtitle_progress, PORTFOLIO_SUBTITLE_HEIGHT))
        .push(revealed(
            tab_bar(ctx.portfolio),
            tabs_progress,
            PORTFOLIO_TABS_HEIGHT,
        ))
        .push(category_bar(ctx.portfolio, active))
        .push(grid(&ctx, active))
        .push(Space::new().height(Length::Fixed(SECTION_PADDING)));

    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::XL]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(ctx.layout.section_height(Section::Portfolio)))
    .style(styles::container::page)
    .into()
}

fn tab_bar<'a>(portfolio: &Portfolio) -> Element<'a, Message> {
    let row = portfolio
        .tabs()
        .tabs()
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, tab| {
            let style = if tab.is_active {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(tab_label(tab.id)).size(typography::BODY_LG))
                    .on_press(Message::TabPressed(tab.id))
                    .padding([spacing::XS, spacing::LG])
                    .style(style),
            )
        });

    Container::new(row)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn category_bar<'a>(portfolio: &Portfolio, tab: TabId) -> Element<'a, Message> {
    let set = portfolio.set(tab);
    let row = set
        .categories()
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, category| {
            let style = if *set.selection() == category {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(category.label()).size(typography::BODY_SM))
                    .on_press(Message::CategoryPressed(tab, category))
                    .padding([spacing::XXS, spacing::MD])
                    .style(style),
            )
        });

    Container::new(row)
        .center_x(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(CATEGORY_BAR_HEIGHT))
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>, tab: TabId) -> Element<'a, Message> {
    let layout = ctx.layout;
    let set = ctx.portfolio.set(tab);
    let visible: Vec<(usize, &'a GalleryItem)> = set.visible().collect();

    if visible.is_empty() {
        return Container::new(hint("No items in this category"))
            .width(Length::Fill)
            .height(Length::Fixed(layout.grid_height()))
            .into();
    }

    let columns = layout.columns();
    let card_height = layout.card_height();
    let mut rows = Column::new().spacing(GRID_GAP);

    for (row_index, chunk) in visible.chunks(columns).enumerate() {
        let mut row = Row::new()
            .spacing(GRID_GAP)
            .height(Length::Fixed(card_height));
        for (offset, (position, item)) in chunk.iter().enumerate() {
            let rank = row_index * columns + offset;
            let entrance = ctx
                .entrances
                .progress(tab, *position, ctx.now, ctx.entrance_duration);
            let card = match tab {
                TabId::Gallery => {
                    let alpha = ctx.reveal.card_progress(rank, ctx.now) * entrance;
                    gallery_card(*position, item, alpha)
                }
                TabId::Ugc => ugc_card(*position, item, ctx.videos, entrance),
            };
            row = row.push(card);
        }
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    Container::new(rows)
        .width(Length::Fill)
        .height(Length::Fixed(layout.grid_height()))
        .into()
}

fn caption<'a>(title: &'a str) -> Element<'a, Message> {
    Container::new(
        Container::new(Text::new(title).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::SM)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Bottom)
    .into()
}

fn missing<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_SM))
        .center(Length::Fill)
        .style(styles::container::missing_media)
        .into()
}

fn gallery_card<'a>(position: usize, item: &'a GalleryItem, alpha: f32) -> Element<'a, Message> {
    let picture: Element<'a, Message> = if item.available {
        image::Image::new(Handle::from_path(item.media.path()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(alpha)
            .into()
    } else {
        missing("Image not available")
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture);
    if alpha >= 1.0 {
        layers = layers.push(caption(&item.title));
    }

    button(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(styles::container::card),
    )
    .on_press(Message::ImagePressed(position))
    .padding(0)
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .style(styles::button::card)
    .into()
}

fn ugc_card<'a>(
    position: usize,
    item: &'a GalleryItem,
    videos: &VideoCards,
    alpha: f32,
) -> Element<'a, Message> {
    let poster: Element<'a, Message> = match (&item.poster, item.available) {
        (Some(poster), true) => image::Image::new(Handle::from_path(poster.path()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(alpha)
            .into(),
        (None, true) => Space::new().width(Length::Fill).height(Length::Fill).into(),
        (_, false) => missing("Video not available"),
    };

    let playback = videos.get(position).unwrap_or_default();
    let badge_label = match (playback.playing, playback.muted) {
        (false, _) => "▶ Play",
        (true, false) => "❚❚ Playing",
        (true, true) => "❚❚ Playing (muted)",
    };
    let badge = Container::new(
        Container::new(Text::new(badge_label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::FULL)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(poster)
        .push(caption(&item.title))
        .push(badge);

    button(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(styles::container::card),
    )
    .on_press(Message::VideoPressed(position))
    .padding(0)
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .style(styles::button::card)
    .into()
}
