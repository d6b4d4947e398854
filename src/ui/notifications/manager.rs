// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in a queue and
//! start their display time only once they become visible. Pushing a toast
//! that is already showing (same severity and text, e.g. a second submit with
//! empty fields) restarts the existing one instead of stacking a copy.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss button of a toast.
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, newest first.
    visible: VecDeque<Notification>,
    /// Waiting for a free slot, oldest first.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, queues it, or refreshes the toast it repeats.
    pub fn push(&mut self, notification: Notification) {
        if let Some(pos) = self.visible.iter().position(|n| n.repeats(&notification)) {
            if let Some(mut existing) = self.visible.remove(pos) {
                existing.restart(notification.shown_at());
                self.visible.push_front(existing);
            }
            return;
        }
        if self.queue.iter().any(|n| n.repeats(&notification)) {
            return;
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a toast, visible or queued. Returns `false` for unknown ids.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible toast whose display time is over.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss_at(id, now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether anything is showing or waiting; drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.restart(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fill(manager: &mut Manager, start: Instant) {
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")).shown(start));
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        fill(&mut manager, Instant::now());
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn newest_notification_is_listed_first() {
        let mut manager = Manager::new();
        manager.push(Notification::info("older"));
        manager.push(Notification::info("newer"));
        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, vec!["newer", "older"]);
    }

    #[test]
    fn repeated_toast_restarts_instead_of_stacking() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(
            Notification::error("Please fill in all fields.")
                .auto_dismiss(Duration::from_secs(5))
                .shown(start),
        );
        manager.push(Notification::info("other"));
        manager.push(
            Notification::error("Please fill in all fields.")
                .shown(start + Duration::from_secs(4)),
        );

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(
            manager.visible().next().map(Notification::message),
            Some("Please fill in all fields.")
        );

        manager.tick(start + Duration::from_secs(6));
        assert!(manager
            .visible()
            .any(|n| n.message() == "Please fill in all fields."));
    }

    #[test]
    fn repeat_of_a_queued_toast_is_dropped() {
        let mut manager = Manager::new();
        fill(&mut manager, Instant::now());
        manager.push(Notification::warning("slow"));
        manager.push(Notification::warning("slow"));
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn promoted_toast_gets_its_full_display_time() {
        let start = Instant::now();
        let mut manager = Manager::new();
        fill(&mut manager, start);
        manager.push(Notification::success("late").shown(start));

        // The first three expire after 3 s and "late" takes a slot.
        manager.tick(start + Duration::from_secs(3));
        assert_eq!(manager.visible_count(), 1);

        manager.tick(start + Duration::from_secs(5));
        assert_eq!(manager.visible().next().map(Notification::message), Some("late"));

        manager.tick(start + Duration::from_secs(6));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_expires_only_timed_out_notifications() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::success("saved").shown(start));
        manager.push(Notification::error("broken").shown(start));

        manager.tick(start + Duration::from_secs(1));
        assert_eq!(manager.visible_count(), 2);

        manager.tick(start + Duration::from_secs(3));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().map(Notification::message), Some("broken"));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }
}
