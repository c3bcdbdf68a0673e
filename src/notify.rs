//! Notifications
//!
//! The workflow controller decides when and with what message to notify;
//! rendering is left to whatever sink is plugged in. `Toasts` is the
//! shipped sink: a signal-backed queue auto-dismissed after each
//! notification's duration.

use leptos::prelude::*;
use leptos::task::spawn_local;

const SUCCESS_DURATION_MS: u32 = 3000;
const ERROR_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub duration_ms: u32,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
            duration_ms: SUCCESS_DURATION_MS,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
            duration_ms: ERROR_DURATION_MS,
        }
    }
}

/// Where workflow outcomes are reported
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// A queued notification with a dismiss handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Signal-backed notification queue rendered by `ToastArea`
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn entries(&self) -> RwSignal<Vec<Toast>> {
        self.entries
    }

    pub fn dismiss(&self, id: u32) {
        self.entries.update(|entries| entries.retain(|t| t.id != id));
    }

    fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let duration = notification.duration_ms;
        self.entries
            .update(|entries| entries.push(Toast { id, notification }));

        let entries = self.entries;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            entries.update(|entries| entries.retain(|t| t.id != id));
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for Toasts {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}
