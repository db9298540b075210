use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised by the favorites store and its persistence layer.
///
/// Remote lookup failures are not represented here; they are reported through
/// [`crate::SearchFailure`] so the presentation layer can show the matching
/// message.
#[derive(Error, Debug)]
pub enum Error {
    /// The persistence backend could not read or write a key.
    #[error("Failed to access stored data for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// A storage key contains characters the backend cannot represent.
    #[error("Invalid storage key: '{0}'")]
    InvalidStorageKey(String),

    /// The favorites collection could not be encoded for storage.
    #[error("Failed to serialize favorites: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The persisted favorites value could not be decoded.
    ///
    /// This is recovered locally by resetting to an empty collection and is
    /// never shown to the user.
    #[error("Persisted favorites are corrupt: {0}")]
    PersistedDataCorrupt(String),

    /// A reorder request was not a permutation of the current favorites.
    #[error("Reorder rejected: {0}")]
    InvalidReorder(String),

    /// No favorite matches the given id or login.
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(String),
}

impl Error {
    pub(crate) fn storage(key: &str, reason: impl ToString) -> Self {
        Error::Storage {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
