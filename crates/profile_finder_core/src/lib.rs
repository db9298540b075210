//! Core logic for the GitHub profile finder.
//!
//! This crate holds everything between the GitHub directory client and the
//! presentation layer:
//!
//! - [`FavoritesStore`]: the ordered, persisted list of favorite users
//! - [`TypeaheadController`]: debounced login suggestions
//! - [`ProfileSearch`]: exact-login lookups and the displayed result
//! - [`ProfileFinder`]: the session object that owns and wires the three
//!
//! Collaborators are injected: the directory as `Arc<dyn UserDirectory>`, the
//! persistence backend as a [`KeyValueStore`], and user-visible messages go to a
//! [`Notifier`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use github_client::{create_anonymous_client, GitHubClient, DEFAULT_API_BASE_URL};
//! use profile_finder_core::{
//!     FileStore, NotificationLog, ProfileFinder, TypeaheadSettings,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = Arc::new(GitHubClient::new(create_anonymous_client(DEFAULT_API_BASE_URL)?));
//! let notifications = Arc::new(NotificationLog::new());
//! let mut finder = ProfileFinder::new(
//!     directory,
//!     FileStore::new(FileStore::default_root()),
//!     notifications.clone(),
//!     TypeaheadSettings::default(),
//! )?;
//!
//! finder.lookup("octocat").await?;
//! finder.toggle_displayed_favorite()?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use github_client::{UserDirectory, UserProfile};
use tracing::{debug, instrument};

pub mod errors;
pub use errors::Error;

pub mod favorites;
pub use favorites::{AddOutcome, FavoriteUser, FavoritesStore, FAVORITES_KEY};

pub mod notifications;
pub use notifications::{Notification, NotificationKind, NotificationLog, Notifier, TracingNotifier};

pub mod search;
pub use search::{ProfileSearch, SearchFailure, SearchPhase, SearchState};

pub mod storage;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

pub mod typeahead;
pub use typeahead::{TypeaheadController, TypeaheadPhase, TypeaheadSettings, TypeaheadSnapshot};

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A single user session: favorites, suggestions and the displayed profile.
///
/// Construct one at start-up and pass it to whatever renders the UI.
pub struct ProfileFinder<S> {
    favorites: FavoritesStore<S>,
    typeahead: TypeaheadController,
    search: ProfileSearch,
}

impl<S: KeyValueStore> ProfileFinder<S> {
    /// Creates a session, loading persisted favorites from `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence backend cannot be read.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        storage: S,
        notifier: Arc<dyn Notifier>,
        typeahead_settings: TypeaheadSettings,
    ) -> Result<Self, Error> {
        let favorites = FavoritesStore::load(storage, Arc::clone(&notifier))?;
        let typeahead = TypeaheadController::new(Arc::clone(&directory), typeahead_settings);
        let search = ProfileSearch::new(directory, notifier);

        Ok(Self {
            favorites,
            typeahead,
            search,
        })
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore<S> {
        &mut self.favorites
    }

    pub fn typeahead(&self) -> &TypeaheadController {
        &self.typeahead
    }

    pub fn search(&self) -> &ProfileSearch {
        &self.search
    }

    /// Looks up an exact login and displays the result.
    ///
    /// # Errors
    ///
    /// Returns the [`SearchFailure`] for this lookup.
    pub async fn lookup(&self, login: &str) -> Result<UserProfile, SearchFailure> {
        self.search.submit(login).await
    }

    /// Accepts a typeahead suggestion and immediately looks it up.
    ///
    /// # Errors
    ///
    /// Returns the [`SearchFailure`] for the lookup.
    #[instrument(skip(self))]
    pub async fn select_suggestion(&self, login: &str) -> Result<UserProfile, SearchFailure> {
        let login = self.typeahead.select(login);
        self.search.submit(&login).await
    }

    /// Toggles the favorite state of the displayed profile.
    ///
    /// Returns `Some(true)` if the profile is now a favorite, `Some(false)` if it
    /// was removed, and `None` when no profile is displayed.
    ///
    /// # Errors
    ///
    /// Returns an error if the favorites cannot be persisted.
    pub fn toggle_displayed_favorite(&mut self) -> Result<Option<bool>, Error> {
        let Some(profile) = self.search.state().profile else {
            debug!("No profile displayed; nothing to toggle");
            return Ok(None);
        };

        let favorited = self.favorites.toggle(FavoriteUser::from(&profile))?;
        Ok(Some(favorited))
    }
}
