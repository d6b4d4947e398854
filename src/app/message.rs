// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::lightbox::LightboxKey;
use crate::domain::scroll::ScrollSample;
use crate::error::SubmitError;
use crate::ui::contact;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::portfolio;
use crate::ui::sections;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Sections(sections::Message),
    Portfolio(portfolio::Message),
    Lightbox(lightbox::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable reported a new viewport.
    Scrolled(ScrollSample),
    /// An animation frame; handles the pending scroll sample.
    Frame(Instant),
    /// Periodic tick for timed form steps and toast auto-dismiss.
    Tick(Instant),
    WindowResized(iced::Size),
    /// A lightbox key was pressed and nothing else consumed it.
    KeyPressed(LightboxKey),
    /// The delayed contact submission completed.
    SubmissionFinished(Result<(), SubmitError>),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional manifest path; defaults to `portfolio.toml` in the working
    /// directory.
    pub manifest_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
