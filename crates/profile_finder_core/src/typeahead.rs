//! Debounced login suggestions.
//!
//! Every call to [`TypeaheadController::input`] starts a new generation. A
//! background task waits out the debounce window and only queries the
//! directory if its generation is still current when the window closes. A
//! response is likewise applied only if no newer input arrived while it was in
//! flight; superseded requests are left to finish and their results dropped.
//!
//! The controller spawns onto the ambient Tokio runtime, so `input` must be
//! called from within one.

use std::sync::Arc;
use std::time::Duration;

use github_client::UserDirectory;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

#[cfg(test)]
#[path = "typeahead_tests.rs"]
mod tests;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_MIN_CHARS: usize = 2;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Tuning for the typeahead controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadSettings {
    /// Quiet period after the last keystroke before a search is issued
    pub debounce: Duration,
    /// Inputs shorter than this (after trimming) never reach the directory
    pub min_chars: usize,
    /// Maximum number of candidates kept
    pub limit: usize,
}

impl Default for TypeaheadSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_chars: DEFAULT_MIN_CHARS,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeaheadPhase {
    #[default]
    Idle,
    Debouncing,
    Fetching,
}

/// Observable typeahead state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeaheadSnapshot {
    /// Raw text as last entered or selected
    pub input: String,
    pub phase: TypeaheadPhase,
    /// Suggested logins in the directory's relevance order
    pub candidates: Vec<String>,
    /// Incremented on every input, selection or clear
    pub generation: u64,
}

impl TypeaheadSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase == TypeaheadPhase::Fetching
    }
}

pub struct TypeaheadController {
    directory: Arc<dyn UserDirectory>,
    settings: TypeaheadSettings,
    state: Arc<watch::Sender<TypeaheadSnapshot>>,
}

impl TypeaheadController {
    pub fn new(directory: Arc<dyn UserDirectory>, settings: TypeaheadSettings) -> Self {
        let (state, _) = watch::channel(TypeaheadSnapshot::default());
        Self {
            directory,
            settings,
            state: Arc::new(state),
        }
    }

    pub fn settings(&self) -> &TypeaheadSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> TypeaheadSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TypeaheadSnapshot> {
        self.state.subscribe()
    }

    /// Records new input text and schedules a debounced search.
    ///
    /// Input shorter than `min_chars` after trimming clears the candidates
    /// immediately and schedules nothing.
    #[instrument(skip(self))]
    pub fn input(&self, text: &str) {
        let query = text.trim().to_string();
        let too_short = query.chars().count() < self.settings.min_chars;

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.input = text.to_string();
            if too_short {
                state.phase = TypeaheadPhase::Idle;
                state.candidates.clear();
            } else {
                state.phase = TypeaheadPhase::Debouncing;
            }
        });

        if too_short {
            debug!(generation, "Input too short for suggestions");
            return;
        }

        let directory = Arc::clone(&self.directory);
        let state = Arc::clone(&self.state);
        let settings = self.settings.clone();
        tokio::spawn(async move {
            tokio::time::sleep(settings.debounce).await;

            let still_current = state.send_if_modified(|snapshot| {
                if snapshot.generation != generation {
                    return false;
                }
                snapshot.phase = TypeaheadPhase::Fetching;
                true
            });
            if !still_current {
                debug!(generation, "Suggestion request superseded before firing");
                return;
            }

            let candidates = match directory.search_logins(&query, settings.limit).await {
                Ok(mut logins) => {
                    logins.truncate(settings.limit);
                    logins
                }
                Err(e) => {
                    warn!(query = %query, error = %e, "Suggestion lookup failed");
                    Vec::new()
                }
            };

            let applied = state.send_if_modified(|snapshot| {
                if snapshot.generation != generation {
                    return false;
                }
                snapshot.phase = TypeaheadPhase::Idle;
                snapshot.candidates = candidates;
                true
            });
            if !applied {
                debug!(generation, "Discarding suggestions for superseded input");
            }
        });
    }

    /// Accepts a suggested login.
    ///
    /// The login becomes the input, candidates are cleared and any pending or
    /// in-flight suggestion request is invalidated. Returns the trimmed login
    /// to hand to the profile search.
    pub fn select(&self, login: &str) -> String {
        let login = login.trim().to_string();
        self.state.send_modify(|state| {
            state.generation += 1;
            state.input = login.clone();
            state.phase = TypeaheadPhase::Idle;
            state.candidates.clear();
        });
        login
    }

    /// Clears input and candidates, invalidating pending work.
    pub fn clear(&self) {
        self.state.send_modify(|state| {
            state.generation += 1;
            state.input.clear();
            state.phase = TypeaheadPhase::Idle;
            state.candidates.clear();
        });
    }

    /// Waits until no request is pending and returns the resulting state.
    pub async fn settled(&self) -> TypeaheadSnapshot {
        let mut updates = self.state.subscribe();
        let settled = match updates
            .wait_for(|snapshot| snapshot.phase == TypeaheadPhase::Idle)
            .await
        {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        };
        settled
    }
}
