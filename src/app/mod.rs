// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the portfolio, the contact form and the
//! scroll-driven page state, and translates messages into side effects like
//! scroll operations or the delayed form submission. Startup problems
//! (unreadable settings, missing manifest or media) never stop the app: they
//! become warnings in the activity log and toasts.

mod message;
mod page;
pub mod paths;
mod playback;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_ACTIVITY_LOG_CAPACITY};
use crate::diagnostics::{ActivityLog, WarningKind};
use crate::domain::contact::ContactForm;
use crate::domain::portfolio::Portfolio;
use crate::domain::video::VideoCards;
use crate::error::Result;
use crate::manifest::{self, Manifest, Profile};
use crate::ui::notifications::{self, Notification};
use iced::{task, window, Element, Size, Subscription, Task, Theme};
use page::PageState;
use playback::FilePlaybackHost;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    /// Theme resolved once at startup (system detection included).
    theme: Theme,
    profile: Profile,
    portfolio: Portfolio,
    videos: VideoCards,
    playback: FilePlaybackHost,
    contact: ContactForm,
    /// Abort handle of the running contact submission.
    submission: Option<task::Handle>,
    page: PageState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    log: ActivityLog,
    /// Time of the last handled message, used by the view for animations.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("profile", &self.profile.name)
            .field("active_tab", &self.portfolio.active_tab())
            .field("lightbox_open", &self.portfolio.lightbox().is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the manifest, reporting problems as toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let manifest_path = paths::resolve_manifest_path(flags.manifest_path.as_deref());
        let app = Self::assemble(
            config,
            config_warning,
            manifest::load(&manifest_path),
            ActivityLog::new(DEFAULT_ACTIVITY_LOG_CAPACITY),
            Instant::now(),
        );
        (app, Task::none())
    }

    /// Builds the state from loaded sources and starts the preloader.
    fn assemble(
        config: Config,
        config_warning: Option<String>,
        manifest: Result<Manifest>,
        mut log: ActivityLog,
        now: Instant,
    ) -> Self {
        let mut notifications = notifications::Manager::new();

        if let Some(warning) = config_warning {
            log.warn(WarningKind::ConfigUnreadable, warning.as_str());
            notifications.push(Notification::warning(warning));
        }

        let manifest = match manifest {
            Ok(manifest) => manifest,
            Err(err) => {
                log.warn(WarningKind::ManifestUnavailable, err.to_string());
                notifications.push(Notification::warning(format!(
                    "Portfolio could not be loaded: {err}"
                )));
                Manifest::default()
            }
        };
        report_missing_media(&manifest, &mut log);

        let Manifest {
            profile,
            gallery,
            ugc,
        } = manifest;
        let videos = VideoCards::new(ugc.len());
        let playback = FilePlaybackHost::from_set(&ugc);
        let portfolio = Portfolio::new(gallery, ugc);
        let mut page = PageState::new(
            &config,
            Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            &portfolio,
        );
        page.start_preloader(now);

        App {
            theme: config.general.theme_mode.theme(),
            contact: ContactForm::new(config.contact.timings()),
            config,
            profile,
            portfolio,
            videos,
            playback,
            submission: None,
            page,
            notifications,
            log,
            now,
        }
    }

    fn title(&self) -> String {
        if self.profile.tagline.is_empty() {
            self.profile.name.clone()
        } else {
            format!("{} - {}", self.profile.name, self.profile.tagline)
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let cards = self.portfolio.set(self.portfolio.active_tab()).visible_count();
        let animating = self.page.pending.is_pending() || self.page.is_animating(cards, self.now);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(animating),
            subscription::create_tick_subscription(
                self.notifications.has_notifications(),
                self.contact.needs_ticks(),
                self.page.debouncer.is_armed(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Frame(at) | Message::Tick(at) => *at,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            config: &self.config,
            portfolio: &mut self.portfolio,
            videos: &mut self.videos,
            playback: &mut self.playback,
            contact: &mut self.contact,
            submission: &mut self.submission,
            page: &mut self.page,
            notifications: &mut self.notifications,
            log: &mut self.log,
            now: self.now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Sections(sections_message) => {
                update::handle_sections_message(&mut ctx, sections_message)
            }
            Message::Portfolio(portfolio_message) => {
                update::handle_portfolio_message(&mut ctx, portfolio_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Scrolled(sample) => update::handle_scrolled(&mut ctx, sample),
            Message::Frame(_) => update::handle_time(&mut ctx, true),
            Message::Tick(_) => update::handle_time(&mut ctx, false),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::KeyPressed(key) => update::handle_key(&mut ctx, key),
            Message::SubmissionFinished(result) => {
                update::handle_submission_finished(&mut ctx, result)
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            profile: &self.profile,
            portfolio: &self.portfolio,
            videos: &self.videos,
            contact: &self.contact,
            page: &self.page,
            notifications: &self.notifications,
            entrance_duration: self.page.reveal_entrance_duration(),
            now: self.now,
        })
    }
}

fn report_missing_media(manifest: &Manifest, log: &mut ActivityLog) {
    for item in manifest
        .gallery
        .items()
        .iter()
        .chain(manifest.ugc.items())
        .filter(|item| !item.available)
    {
        log.warn(WarningKind::MediaMissing, item.media.to_string());
    }
    if let Some(portrait) = manifest
        .profile
        .portrait
        .as_ref()
        .filter(|_| !manifest.profile.portrait_available)
    {
        log.warn(WarningKind::MediaMissing, portrait.display().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{Field, Phase};
    use crate::domain::gallery::Category;
    use crate::domain::lightbox::LightboxKey;
    use crate::domain::scroll::ScrollSample;
    use crate::domain::tabs::TabId;
    use crate::ui::{contact, navbar, portfolio};
    use std::fs;
    use std::path::Path;
    use std::sync::PoisonError;
    use std::time::Duration;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
[profile]
name = "Simran"

[[gallery]]
category = "wedding"
image = "images/w0.jpg"

[[gallery]]
category = "portrait"
image = "images/p1.jpg"

[[gallery]]
category = "wedding"
image = "images/w2.jpg"

[[gallery]]
category = "portrait"
image = "images/p3.jpg"

[[ugc]]
category = "beauty"
video = "videos/clip.mp4"
"#;

    /// Runs `test` against an app whose settings and manifest live in a
    /// temporary directory.
    fn with_temp_app<F>(test: F)
    where
        F: FnOnce(App),
    {
        let _guard = paths::ENV_MUTEX
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_portfolio(temp_dir.path());
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        let (app, _task) = App::new(Flags {
            manifest_path: Some(temp_dir.path().join("portfolio.toml").display().to_string()),
            config_dir: None,
        });
        std::env::remove_var(paths::ENV_CONFIG_DIR);

        test(app);
    }

    fn write_portfolio(dir: &Path) {
        fs::create_dir_all(dir.join("images")).expect("images dir");
        fs::create_dir_all(dir.join("videos")).expect("videos dir");
        for file in ["images/w0.jpg", "images/p1.jpg", "images/w2.jpg", "images/p3.jpg"] {
            fs::write(dir.join(file), b"jpeg").expect("write image");
        }
        fs::write(dir.join("videos/clip.mp4"), b"mp4").expect("write video");
        fs::write(dir.join("portfolio.toml"), MANIFEST).expect("write manifest");
    }

    fn press(app: &mut App, message: portfolio::Message) {
        let _ = app.update(Message::Portfolio(message));
    }

    fn entrance_running(app: &App, tab: TabId, position: usize) -> bool {
        let duration = app.page.reveal_entrance_duration();
        app.page.entrances.progress(tab, position, app.now, duration) < 1.0
    }

    #[test]
    fn new_loads_the_manifest_and_shows_the_preloader() {
        with_temp_app(|app| {
            assert_eq!(app.title(), "Simran");
            assert_eq!(app.portfolio.set(TabId::Gallery).len(), 4);
            assert_eq!(app.videos.len(), 1);
            assert_eq!(app.log.warnings().count(), 0);
            assert!(!app.notifications.has_notifications());
            assert_eq!(app.page.preloader_alpha(app.now), Some(1.0));
        });
    }

    #[test]
    fn missing_manifest_falls_back_with_a_warning() {
        let _guard = paths::ENV_MUTEX
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        let (app, _task) = App::new(Flags {
            manifest_path: Some(temp_dir.path().join("nowhere.toml").display().to_string()),
            config_dir: None,
        });
        std::env::remove_var(paths::ENV_CONFIG_DIR);

        assert!(app.portfolio.set(TabId::Gallery).is_empty());
        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(
            app.log.warnings().map(|w| w.kind).collect::<Vec<_>>(),
            vec![WarningKind::ManifestUnavailable]
        );
    }

    #[test]
    fn filter_starts_entrances_for_newly_shown_cards() {
        with_temp_app(|mut app| {
            let tab = TabId::Gallery;
            press(&mut app, portfolio::Message::CategoryPressed(tab, Category::new("wedding")));
            assert!(app.page.entrances.is_empty());
            assert_eq!(app.portfolio.set(tab).visible_count(), 2);

            press(&mut app, portfolio::Message::CategoryPressed(tab, Category::all()));
            assert!(entrance_running(&app, tab, 1));
            assert!(entrance_running(&app, tab, 3));
            assert!(!entrance_running(&app, tab, 0));
        });
    }

    #[test]
    fn tab_switch_pauses_videos_and_replays_reset_entrances() {
        with_temp_app(|mut app| {
            press(
                &mut app,
                portfolio::Message::CategoryPressed(TabId::Gallery, Category::new("portrait")),
            );
            press(&mut app, portfolio::Message::TabPressed(TabId::Ugc));
            assert!(entrance_running(&app, TabId::Gallery, 0));
            assert!(entrance_running(&app, TabId::Gallery, 2));
            assert!(app.portfolio.set(TabId::Gallery).selection().is_all());

            press(&mut app, portfolio::Message::VideoPressed(0));
            assert!(app.videos.get(0).is_some_and(|card| card.playing));

            press(&mut app, portfolio::Message::TabPressed(TabId::Gallery));
            assert!(app.videos.get(0).is_some_and(|card| !card.playing));
            assert_eq!(app.portfolio.active_tab(), TabId::Gallery);
        });
    }

    #[test]
    fn pressing_a_hidden_image_keeps_the_lightbox_closed() {
        with_temp_app(|mut app| {
            press(
                &mut app,
                portfolio::Message::CategoryPressed(TabId::Gallery, Category::new("wedding")),
            );
            press(&mut app, portfolio::Message::ImagePressed(1));

            assert!(!app.portfolio.lightbox().is_open());
            assert_eq!(
                app.log.warnings().last().map(|w| w.kind),
                Some(WarningKind::LightboxTargetMissing)
            );
        });
    }

    #[test]
    fn lightbox_navigation_is_logged_and_locks_scrolling() {
        with_temp_app(|mut app| {
            press(&mut app, portfolio::Message::ImagePressed(2));
            assert!(app.portfolio.lightbox().is_open());

            let _ = app.update(Message::Lightbox(crate::ui::lightbox::Message::Next));
            assert_eq!(
                app.log.last_action(),
                Some(&crate::diagnostics::UserAction::LightboxNext)
            );

            let _ = app.update(Message::Scrolled(ScrollSample {
                offset_y: 400.0,
                content_height: 4_000.0,
                viewport_height: 800.0,
            }));
            assert!(!app.page.pending.is_pending());

            let _ = app.update(Message::KeyPressed(LightboxKey::Escape));
            assert!(!app.portfolio.lightbox().is_open());
            assert_eq!(
                app.log.last_action(),
                Some(&crate::diagnostics::UserAction::CloseLightbox)
            );
        });
    }

    #[test]
    fn escape_closes_the_menu_while_the_lightbox_is_closed() {
        with_temp_app(|mut app| {
            let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
            assert!(app.page.menu_open);

            let _ = app.update(Message::KeyPressed(LightboxKey::Escape));
            assert!(!app.page.menu_open);
            assert!(!app.portfolio.lightbox().is_open());
        });
    }

    #[test]
    fn close_request_cancels_a_running_submission() {
        with_temp_app(|mut app| {
            for (field, value) in [
                (Field::Name, "Ada"),
                (Field::Email, "ada@example.com"),
                (Field::Message, "Hello"),
            ] {
                let _ = app.update(Message::Contact(contact::Message::FieldChanged(
                    field,
                    value.to_string(),
                )));
            }
            let _ = app.update(Message::Contact(contact::Message::SubmitPressed));
            assert_eq!(app.contact.phase(), Phase::Sending);
            assert!(app.submission.is_some());

            let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
            assert_eq!(app.contact.phase(), Phase::Idle);
            assert!(app.submission.is_none());
            assert_eq!(app.contact.field(Field::Name).value(), "Ada");
        });
    }

    #[test]
    fn frames_settle_the_preloader() {
        with_temp_app(|mut app| {
            let later = app.now + Duration::from_secs(2);
            let _ = app.update(Message::Frame(later));
            assert_eq!(app.page.preloader_alpha(app.now), None);
        });
    }
}
