// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections. Fixed chrome (progress bar,
//! navbar, transition veil), the lightbox, the startup preloader and the
//! toasts are stacked above it.

use super::page::PageState;
use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::domain::contact::ContactForm;
use crate::domain::layout::Section;
use crate::domain::portfolio::Portfolio;
use crate::domain::reveal::RevealTarget;
use crate::domain::scroll::ScrollSample;
use crate::domain::video::VideoCards;
use crate::manifest::Profile;
use crate::ui::contact;
use crate::ui::design_tokens::opacity;
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::portfolio::{self, ViewContext as PortfolioViewContext};
use crate::ui::sections;
use iced::widget::{mouse_area, opaque, Column, Id, Scrollable, Space, Stack};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub profile: &'a Profile,
    pub portfolio: &'a Portfolio,
    pub videos: &'a VideoCards,
    pub contact: &'a ContactForm,
    pub page: &'a PageState,
    pub notifications: &'a notifications::Manager,
    pub entrance_duration: Duration,
    pub now: Instant,
}

/// Renders the page and every overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = ctx.page;
    let now = ctx.now;

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&ctx));

    if let Some(alpha) = page.transition_alpha(now) {
        layers = layers.push(sections::transition_veil(alpha * opacity::OVERLAY_STRONG));
    }

    if page.menu_open {
        layers = layers.push(
            mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .on_press(Message::Navbar(navbar::Message::CloseMenu)),
        );
    }

    let navbar_view = navbar::view(NavbarViewContext {
        brand: ctx.profile.name.as_str(),
        menu_open: page.menu_open,
        scrolled: page.scroll.navbar_scrolled(),
        compact: page.is_compact(),
    })
    .map(Message::Navbar);

    layers = layers.push(
        Column::new()
            .width(Length::Fill)
            .push(sections::progress_bar(page.scroll.progress()))
            .push(navbar_view),
    );

    if let Some(viewing) = ctx.portfolio.lightbox().viewing() {
        layers = layers.push(opaque(
            lightbox::view(LightboxViewContext {
                viewing,
                window: page.window,
            })
            .map(Message::Lightbox),
        ));
    }

    // Startup warnings stay readable above the splash.
    if let Some(alpha) = page.preloader_alpha(now) {
        layers = layers.push(opaque(sections::preloader(&ctx.profile.name, alpha)));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let page = ctx.page;
    let reveal = &page.reveal;
    let contact_title = reveal.target_progress(RevealTarget::SectionTitle(Section::Contact), ctx.now);

    let column = Column::new()
        .width(Length::Fill)
        .push(sections::hero(ctx.profile, &page.layout).map(Message::Sections))
        .push(sections::about(
            ctx.profile,
            reveal,
            page.scroll.parallax(),
            ctx.now,
        ))
        .push(
            portfolio::view(PortfolioViewContext {
                portfolio: ctx.portfolio,
                layout: &page.layout,
                reveal,
                entrances: &page.entrances,
                entrance_duration: ctx.entrance_duration,
                videos: ctx.videos,
                now: ctx.now,
            })
            .map(Message::Portfolio),
        )
        .push(contact::view(ctx.contact, contact_title).map(Message::Contact))
        .push(sections::footer(ctx.profile.name.as_str()));

    Scrollable::new(column)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(|viewport| {
            Message::Scrolled(ScrollSample {
                offset_y: viewport.absolute_offset().y,
                content_height: viewport.content_bounds().height,
                viewport_height: viewport.bounds().height,
            })
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
