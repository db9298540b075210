//! Ordered, persisted collection of favorite GitHub users.
//!
//! The store owns the in-memory collection and is the only writer of its
//! persistence key. The persisted value is a mirror: it seeds memory when the
//! store is loaded and is rewritten after every mutation. A mutation only
//! takes effect in memory once the new value has been written, so the two
//! never disagree.
//!
//! Adding a user whose `id` is already present is rejected without side
//! effects.

use std::collections::HashSet;
use std::sync::Arc;

use github_client::UserProfile;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::errors::Error;
use crate::notifications::{Notification, Notifier};
use crate::storage::KeyValueStore;

#[cfg(test)]
#[path = "favorites_tests.rs"]
mod tests;

/// Storage key holding the serialized favorites array.
pub const FAVORITES_KEY: &str = "github-favorites";

/// A favorited user as persisted.
///
/// Fields are captured when the user is favorited and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteUser {
    /// GitHub's numeric user id, unique within the collection
    pub id: u64,
    pub login: String,
    /// Absent and empty are kept distinct across a round trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
}

impl FavoriteUser {
    /// Returns `name` when it is non-empty, otherwise `login`.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

impl From<&UserProfile> for FavoriteUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            login: profile.login.clone(),
            name: profile.name.clone(),
            avatar_url: profile.avatar_url.clone(),
            html_url: profile.html_url.clone(),
        }
    }
}

/// Result of [`FavoritesStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// The favorites collection and its persistence.
pub struct FavoritesStore<S> {
    storage: S,
    notifier: Arc<dyn Notifier>,
    favorites: Arc<[FavoriteUser]>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Loads the collection from `storage`.
    ///
    /// An absent key yields an empty collection. A value that cannot be decoded
    /// is logged, removed from storage, and treated as empty. Duplicate ids in
    /// the stored array are dropped (first occurrence wins) and the cleaned
    /// array is written back.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend itself fails.
    #[instrument(skip(storage, notifier))]
    pub fn load(mut storage: S, notifier: Arc<dyn Notifier>) -> Result<Self, Error> {
        let favorites = match storage.get(FAVORITES_KEY)? {
            None => {
                debug!("No stored favorites");
                Vec::new()
            }
            Some(raw) => match decode_favorites(&raw) {
                Ok(decoded) => {
                    let decoded_len = decoded.len();
                    let unique = dedupe_by_id(decoded);
                    if unique.len() != decoded_len {
                        warn!(
                            stored = decoded_len,
                            kept = unique.len(),
                            "Stored favorites contained duplicate ids"
                        );
                        storage.set(FAVORITES_KEY, &encode_favorites(&unique)?)?;
                    }
                    unique
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable stored favorites");
                    storage.remove(FAVORITES_KEY)?;
                    Vec::new()
                }
            },
        };

        info!(count = favorites.len(), "Loaded favorites");
        Ok(Self {
            storage,
            notifier,
            favorites: favorites.into(),
        })
    }

    /// Returns the current order.
    ///
    /// The returned slice is never modified; later mutations replace it.
    pub fn snapshot(&self) -> Arc<[FavoriteUser]> {
        Arc::clone(&self.favorites)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.iter().any(|user| user.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&FavoriteUser> {
        self.favorites.iter().find(|user| user.id == id)
    }

    /// Finds a favorite by login, ignoring ASCII case as GitHub does.
    pub fn find_by_login(&self, login: &str) -> Option<&FavoriteUser> {
        self.favorites
            .iter()
            .find(|user| user.login.eq_ignore_ascii_case(login))
    }

    /// Appends `user` to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted; the
    /// collection is left unchanged in that case.
    #[instrument(skip(self, user), fields(user_id = user.id, login = %user.login))]
    pub fn add(&mut self, user: FavoriteUser) -> Result<AddOutcome, Error> {
        if self.is_favorite(user.id) {
            debug!("User is already a favorite");
            return Ok(AddOutcome::AlreadyPresent);
        }

        let notification = Notification::favorite_added(&user);
        let mut updated = self.favorites.to_vec();
        updated.push(user);
        self.commit(updated)?;

        info!(count = self.favorites.len(), "Added favorite");
        self.notifier.notify(notification);
        Ok(AddOutcome::Added)
    }

    /// Removes the favorite with `id`, returning it if it was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: u64) -> Result<Option<FavoriteUser>, Error> {
        let Some(removed) = self.get(id).cloned() else {
            debug!("No favorite with that id");
            return Ok(None);
        };

        let updated: Vec<FavoriteUser> = self
            .favorites
            .iter()
            .filter(|user| user.id != id)
            .cloned()
            .collect();
        self.commit(updated)?;

        info!(login = %removed.login, count = self.favorites.len(), "Removed favorite");
        self.notifier.notify(Notification::favorite_removed(&removed));
        Ok(Some(removed))
    }

    /// Adds `user` if absent, otherwise removes it. Returns the new membership.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted.
    pub fn toggle(&mut self, user: FavoriteUser) -> Result<bool, Error> {
        if self.is_favorite(user.id) {
            self.remove(user.id)?;
            Ok(false)
        } else {
            self.add(user)?;
            Ok(true)
        }
    }

    /// Replaces the order with `new_order`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidReorder` if `new_order` does not contain exactly
    /// the ids of the current collection, and a storage error if it cannot be
    /// persisted. Nothing changes on error.
    #[instrument(skip(self, new_order), fields(count = new_order.len()))]
    pub fn reorder(&mut self, new_order: Vec<FavoriteUser>) -> Result<(), Error> {
        if new_order.len() != self.favorites.len() {
            return Err(Error::InvalidReorder(format!(
                "expected {} favorites, got {}",
                self.favorites.len(),
                new_order.len()
            )));
        }

        let mut current: Vec<u64> = self.favorites.iter().map(|user| user.id).collect();
        let mut proposed: Vec<u64> = new_order.iter().map(|user| user.id).collect();
        current.sort_unstable();
        proposed.sort_unstable();
        if current != proposed {
            return Err(Error::InvalidReorder(
                "the new order is not a permutation of the current favorites".to_string(),
            ));
        }

        self.commit(new_order)?;
        debug!("Reordered favorites");
        Ok(())
    }

    /// Moves the favorite with `id` to `index`, shifting the others.
    ///
    /// Indices past the end move the favorite to the last position.
    ///
    /// # Errors
    ///
    /// Returns `Error::FavoriteNotFound` if no favorite has `id`.
    pub fn move_favorite(&mut self, id: u64, index: usize) -> Result<(), Error> {
        let mut order = self.favorites.to_vec();
        let from = order
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| Error::FavoriteNotFound(id.to_string()))?;

        let user = order.remove(from);
        let to = index.min(order.len());
        order.insert(to, user);

        self.reorder(order)
    }

    /// Returns the persistence backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the persistence backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, updated: Vec<FavoriteUser>) -> Result<(), Error> {
        let encoded = encode_favorites(&updated)?;
        self.storage.set(FAVORITES_KEY, &encoded)?;
        self.favorites = updated.into();
        Ok(())
    }
}

/// Serializes the collection in display order.
pub fn encode_favorites(favorites: &[FavoriteUser]) -> Result<String, Error> {
    Ok(serde_json::to_string(favorites)?)
}

/// Parses a persisted favorites array.
///
/// # Errors
///
/// Returns `Error::PersistedDataCorrupt` if `raw` is not an array of favorites.
pub fn decode_favorites(raw: &str) -> Result<Vec<FavoriteUser>, Error> {
    serde_json::from_str(raw).map_err(|e| Error::PersistedDataCorrupt(e.to_string()))
}

fn dedupe_by_id(favorites: Vec<FavoriteUser>) -> Vec<FavoriteUser> {
    let mut seen = HashSet::new();
    favorites
        .into_iter()
        .filter(|user| seen.insert(user.id))
        .collect()
}
