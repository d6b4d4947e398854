// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, window) are routed to the page, and timers run
//! only while something is animating or waiting for a deadline.

use super::Message;
use crate::domain::lightbox::LightboxKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period for form steps and toast timeouts.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn lightbox_key(key: &Key) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

/// Routes window and keyboard events.
///
/// Lightbox keys are only forwarded when no widget (e.g. a focused text
/// field) captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => lightbox_key(&key).map(Message::KeyPressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Per-frame redraws while a scroll sample is pending or an animation runs.
pub fn create_frame_subscription(active: bool) -> Subscription<Message> {
    if active {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for timed form steps, toast
/// auto-dismiss and the scroll debounce.
pub fn create_tick_subscription(
    has_notifications: bool,
    form_pending: bool,
    debounce_armed: bool,
) -> Subscription<Message> {
    if has_notifications || form_pending || debounce_armed {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_navigation_keys_reach_the_lightbox() {
        assert_eq!(
            lightbox_key(&Key::Named(Named::Escape)),
            Some(LightboxKey::Escape)
        );
        assert_eq!(
            lightbox_key(&Key::Named(Named::ArrowRight)),
            Some(LightboxKey::ArrowRight)
        );
        assert_eq!(lightbox_key(&Key::Named(Named::Enter)), None);
        assert_eq!(lightbox_key(&Key::Character("a".into())), None);
    }
}
