//! Exact-login profile lookup.
//!
//! Each submit moves the visible state through `Loading` to either `Success`
//! or `Failure`. Submits are numbered; only the response to the most recently
//! issued request is applied to the visible state, so a slow earlier lookup
//! cannot overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use github_client::{UserDirectory, UserProfile};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::notifications::{Notification, Notifier};

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;

/// Why a lookup failed, as shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// GitHub has no user with the requested login.
    #[error("User not found.")]
    UserNotFound,

    /// Any other failure: transport, unexpected status, unreadable body.
    #[error("Failed to fetch user data.")]
    FetchFailed,

    /// The login was blank after trimming; no request was made.
    #[error("Please enter a username.")]
    EmptyLogin,
}

impl SearchFailure {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            SearchFailure::UserNotFound => "user_not_found",
            SearchFailure::FetchFailed => "fetch_failed",
            SearchFailure::EmptyLogin => "empty_login",
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<github_client::Error> for SearchFailure {
    fn from(error: github_client::Error) -> Self {
        match error {
            github_client::Error::NotFound => SearchFailure::UserNotFound,
            _ => SearchFailure::FetchFailed,
        }
    }
}

/// Coarse phase of the search flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// What the display layer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub loading: bool,
    pub profile: Option<UserProfile>,
    pub error: Option<SearchFailure>,
}

impl SearchState {
    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if self.error.is_some() {
            SearchPhase::Failure
        } else if self.profile.is_some() {
            SearchPhase::Success
        } else {
            SearchPhase::Idle
        }
    }
}

/// Runs lookups and holds the currently displayed result.
pub struct ProfileSearch {
    directory: Arc<dyn UserDirectory>,
    notifier: Arc<dyn Notifier>,
    latest_request: AtomicU64,
    state: watch::Sender<SearchState>,
}

impl ProfileSearch {
    pub fn new(directory: Arc<dyn UserDirectory>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            directory,
            notifier,
            latest_request: AtomicU64::new(0),
            state,
        }
    }

    /// Returns a copy of the visible state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every visible state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Looks up `login` and, if this is still the newest request, displays the
    /// result.
    ///
    /// The outcome of this particular request is returned either way. On
    /// failure the previously displayed profile is cleared and an error
    /// notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns `SearchFailure::EmptyLogin` for blank input without touching the
    /// visible state, `SearchFailure::UserNotFound` for unknown logins and
    /// `SearchFailure::FetchFailed` for everything else.
    #[instrument(skip(self))]
    pub async fn submit(&self, login: &str) -> Result<UserProfile, SearchFailure> {
        let login = login.trim();
        if login.is_empty() {
            debug!("Ignoring blank login");
            return Err(SearchFailure::EmptyLogin);
        }

        let sequence = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let mut in_flight = InFlight {
            search: self,
            sequence,
            armed: true,
        };
        let result = self.directory.get_user(login).await.map_err(|e| {
            warn!(login = login, error = %e, "Profile lookup failed");
            SearchFailure::from(e)
        });
        in_flight.armed = false;

        let applied = self.state.send_if_modified(|state| {
            if self.latest_request.load(Ordering::SeqCst) != sequence {
                return false;
            }

            state.loading = false;
            match &result {
                Ok(profile) => {
                    state.profile = Some(profile.clone());
                    state.error = None;
                }
                Err(failure) => {
                    state.profile = None;
                    state.error = Some(*failure);
                }
            }
            true
        });

        if !applied {
            debug!(sequence, "Discarding response to a superseded lookup");
            return result;
        }

        match &result {
            Ok(profile) => info!(login = profile.login, "Displaying profile"),
            Err(failure) => {
                info!(reason = failure.reason(), "Displaying lookup failure");
                self.notifier.notify(Notification::search_failed(*failure));
            }
        }

        result
    }

    /// Clears the displayed profile and any error.
    ///
    /// Responses to requests issued before this call are discarded.
    pub fn reset(&self) {
        self.latest_request.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(SearchState::default());
    }
}

/// Clears `loading` if a submit future is dropped before its response arrives
/// while it is still the newest request.
struct InFlight<'a> {
    search: &'a ProfileSearch,
    sequence: u64,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let sequence = self.sequence;
        let latest = &self.search.latest_request;
        let cleared = self.search.state.send_if_modified(|state| {
            if latest.load(Ordering::SeqCst) != sequence || !state.loading {
                return false;
            }
            state.loading = false;
            true
        });
        if cleared {
            debug!(sequence, "Lookup abandoned before completion");
        }
    }
}
