//! User-visible confirmations and error notices.
//!
//! Components emit [`Notification`]s through an injected [`Notifier`]; how they
//! are shown is up to the presentation layer.

use std::sync::Mutex;

use tracing::{error, info};

use crate::favorites::FavoriteUser;
use crate::search::SearchFailure;

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod tests;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Confirmation shown after a user is added to the favorites.
    pub fn favorite_added(user: &FavoriteUser) -> Self {
        Self::info(
            "Added to favorites",
            format!(
                "{} has been added to your favorites.",
                user.display_name()
            ),
        )
    }

    /// Confirmation shown after a user is removed from the favorites.
    pub fn favorite_removed(user: &FavoriteUser) -> Self {
        Self::info(
            "Removed from favorites",
            format!(
                "{} has been removed from your favorites.",
                user.display_name()
            ),
        )
    }

    /// Error notice for a failed profile lookup.
    pub fn search_failed(failure: SearchFailure) -> Self {
        Self::error("Error", failure.message())
    }
}

/// Receives notifications for display.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Info => info!(
                title = notification.title,
                "{}",
                notification.description
            ),
            NotificationKind::Error => error!(
                title = notification.title,
                "{}",
                notification.description
            ),
        }
    }
}

/// Collects notifications in the order they were emitted.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
