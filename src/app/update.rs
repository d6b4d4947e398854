// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch and returns the follow-up [`Task`].

use super::page::PageState;
use super::playback::FilePlaybackHost;
use super::Message;
use crate::config::Config;
use crate::diagnostics::{ActivityLog, UserAction, WarningKind};
use crate::domain::contact::{ContactForm, SUCCESS_MESSAGE};
use crate::domain::gallery::FilterOutcome;
use crate::domain::layout::Section;
use crate::domain::lightbox::{ClickTarget, LightboxKey, Transition};
use crate::domain::portfolio::Portfolio;
use crate::domain::scroll::ScrollSample;
use crate::domain::tabs::TabId;
use crate::domain::video::{ToggleOutcome, VideoCards};
use crate::error::SubmitError;
use crate::ui::contact;
use crate::ui::lightbox;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::portfolio;
use crate::ui::sections;
use iced::task;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Task};
use std::time::Instant;

/// Widget id of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub portfolio: &'a mut Portfolio,
    pub videos: &'a mut VideoCards,
    pub playback: &'a mut FilePlaybackHost,
    pub contact: &'a mut ContactForm,
    /// Abort handle of the running contact submission.
    pub submission: &'a mut Option<task::Handle>,
    pub page: &'a mut PageState,
    pub notifications: &'a mut notifications::Manager,
    pub log: &'a mut ActivityLog,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn scroll_to(&mut self, section: Section) -> Task<Message> {
        self.log.record_action(UserAction::NavigateTo { section });
        let y = self
            .page
            .scroll_target(section, self.config.navigation.section_offset());
        operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
    }

    /// Starts entrances for newly shown cards. The geometry only changes
    /// when some visibility flag did.
    fn after_filter(&mut self, tab: TabId, outcome: &FilterOutcome) {
        self.page.entrances.start(tab, &outcome.shown, self.now);
        if !outcome.is_unchanged() {
            self.page.relayout(&*self.portfolio, self.now);
        }
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    if matches!(message, navbar::Message::ToggleMenu) {
        ctx.log.record_action(UserAction::ToggleMenu);
    }
    match navbar::update(message, &mut ctx.page.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::NavigateTo(section) => {
            ctx.page.start_transition(ctx.now);
            ctx.scroll_to(section)
        }
    }
}

pub fn handle_sections_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::ScrollTo(section) => ctx.scroll_to(section),
    }
}

pub fn handle_portfolio_message(
    ctx: &mut UpdateContext<'_>,
    message: portfolio::Message,
) -> Task<Message> {
    match message {
        portfolio::Message::TabPressed(tab) => {
            let Some(resets) = ctx.portfolio.activate_tab(tab) else {
                return Task::none();
            };
            ctx.log.record_action(UserAction::ActivateTab { tab });
            if tab != TabId::Ugc {
                ctx.videos.pause_all(&mut *ctx.playback);
            }
            for (reset_tab, outcome) in &resets {
                ctx.page.entrances.start(*reset_tab, &outcome.shown, ctx.now);
            }
            ctx.page.relayout(&*ctx.portfolio, ctx.now);
        }
        portfolio::Message::CategoryPressed(tab, category) => {
            ctx.log.record_action(UserAction::SelectCategory {
                tab,
                category: category.as_str().to_string(),
            });
            let outcome = ctx.portfolio.select_category(tab, category);
            ctx.after_filter(tab, &outcome);
        }
        portfolio::Message::ImagePressed(position) => {
            ctx.page.menu_open = false;
            match ctx.portfolio.open_lightbox_at(position) {
                Some(Ok(_)) => {
                    if let Some(viewing) = ctx.portfolio.lightbox().viewing() {
                        ctx.log.record_action(UserAction::OpenLightbox {
                            index: viewing.index(),
                            len: viewing.len(),
                        });
                    }
                }
                Some(Err(err)) => ctx
                    .log
                    .warn(WarningKind::LightboxTargetMissing, err.to_string()),
                None => ctx.log.warn(
                    WarningKind::LightboxTargetMissing,
                    format!("no gallery item at position {position}"),
                ),
            }
        }
        portfolio::Message::VideoPressed(card) => {
            ctx.log.record_action(UserAction::TogglePlayback { card });
            match ctx.videos.toggle(card, &mut *ctx.playback) {
                ToggleOutcome::Paused | ToggleOutcome::Playing { .. } => {}
                ToggleOutcome::Refused(refused) => {
                    ctx.log
                        .warn(WarningKind::PlaybackRefused, format!("card {card}: {refused}"));
                    ctx.notifications
                        .push(Notification::warning("This video could not be played."));
                }
                ToggleOutcome::Missing => ctx.log.warn(
                    WarningKind::PlaybackRefused,
                    format!("no video card at position {card}"),
                ),
            }
        }
    }
    Task::none()
}

/// Action worth logging for a lightbox change; `moved` is what a `Moved`
/// transition stands for at the call site.
fn lightbox_action(transition: Transition, moved: Option<UserAction>) -> Option<UserAction> {
    match transition {
        Transition::Closed => Some(UserAction::CloseLightbox),
        Transition::Moved => moved,
        Transition::Opened | Transition::Unchanged => None,
    }
}

fn key_move(key: LightboxKey) -> Option<UserAction> {
    match key {
        LightboxKey::ArrowLeft => Some(UserAction::LightboxPrevious),
        LightboxKey::ArrowRight => Some(UserAction::LightboxNext),
        LightboxKey::Escape => None,
    }
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    let session = ctx.portfolio.lightbox_mut();
    let action = match message {
        lightbox::Message::BackdropPressed => {
            lightbox_action(session.handle_click(ClickTarget::Backdrop), None)
        }
        lightbox::Message::Close => lightbox_action(session.close(), None),
        lightbox::Message::Previous => {
            lightbox_action(session.previous(), Some(UserAction::LightboxPrevious))
        }
        lightbox::Message::Next => {
            lightbox_action(session.next(), Some(UserAction::LightboxNext))
        }
    };
    if let Some(action) = action {
        ctx.log.record_action(action);
    }
    Task::none()
}

/// Keyboard navigation. Ignored while the lightbox is closed.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: LightboxKey) -> Task<Message> {
    if key == LightboxKey::Escape && !ctx.portfolio.lightbox().is_open() {
        ctx.page.menu_open = false;
        return Task::none();
    }
    let transition = ctx.portfolio.lightbox_mut().handle_key(key);
    if let Some(action) = lightbox_action(transition, key_move(key)) {
        ctx.log.record_action(action);
    }
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match message {
        contact::Message::FieldChanged(field, value) => {
            ctx.contact.set_value(field, value);
            Task::none()
        }
        contact::Message::SubmitPressed => match ctx.contact.submit(ctx.now) {
            Ok(false) => Task::none(),
            Ok(true) => {
                ctx.log
                    .record_action(UserAction::SubmitContact { accepted: true });
                let delay = ctx.contact.timings().send;
                let (task, handle) = Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        Ok::<(), SubmitError>(())
                    },
                    Message::SubmissionFinished,
                )
                .abortable();
                *ctx.submission = Some(handle.abort_on_drop());
                task
            }
            Err(err) => {
                ctx.log
                    .record_action(UserAction::SubmitContact { accepted: false });
                ctx.notifications.push(
                    Notification::error(err.to_string())
                        .auto_dismiss(ctx.config.contact.toast_duration()),
                );
                Task::none()
            }
        },
    }
}

pub fn handle_submission_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), SubmitError>,
) -> Task<Message> {
    *ctx.submission = None;
    if ctx.contact.finish_sending(result, ctx.now) {
        ctx.notifications.push(
            Notification::success(SUCCESS_MESSAGE)
                .auto_dismiss(ctx.config.contact.toast_duration()),
        );
    }
    Task::none()
}

/// Cancels a running submission; the form goes back to idle untouched.
pub fn abort_submission(ctx: &mut UpdateContext<'_>) {
    if let Some(handle) = ctx.submission.take() {
        handle.abort();
        ctx.contact.finish_sending(Err(SubmitError::Aborted), ctx.now);
    }
}

/// Queues a scroll sample; the next frame handles the latest one.
///
/// The page is locked while the lightbox is open, so samples are dropped.
pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, sample: ScrollSample) -> Task<Message> {
    if ctx.portfolio.lightbox().locks_scroll() {
        return Task::none();
    }
    ctx.page.pending.offer(sample);
    ctx.page.debouncer.poke(ctx.now);
    Task::none()
}

/// Advances every timed state to `ctx.now`.
pub fn handle_time(ctx: &mut UpdateContext<'_>, frame: bool) -> Task<Message> {
    if frame {
        if let Some(sample) = ctx.page.pending.take() {
            ctx.page.apply_sample(sample, &*ctx.portfolio, ctx.now);
        }
    }
    // The settled-scroll hook has no state to update.
    let _settled = ctx.page.debouncer.poll(ctx.now);
    ctx.page.settle(ctx.now);
    ctx.notifications.tick(ctx.now);
    ctx.contact.tick(ctx.now);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) -> Task<Message> {
    ctx.page.window = size;
    if !ctx.page.is_compact() {
        ctx.page.menu_open = false;
    }
    ctx.page.relayout(&*ctx.portfolio, ctx.now);
    Task::none()
}

pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    abort_submission(ctx);
    ctx.videos.pause_all(&mut *ctx.playback);
    ctx.log.report_session();
    window::close(id)
}
