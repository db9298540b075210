use thiserror::Error;

use profile_finder_core::SearchFailure;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the profile finder CLI.
///
/// Wraps the errors of the underlying crates so every command can return a
/// single type and `main` can map any failure to exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The favorites collection could not be read or updated.
    #[error("Favorites error: {0}")]
    Favorites(#[from] profile_finder_core::Error),

    /// A profile lookup failed. The message is the one shown to the user.
    #[error("{0}")]
    Search(#[from] SearchFailure),

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    GitHub(#[from] github_client::Error),

    /// Output could not be rendered as JSON.
    #[error("Failed to render JSON output: {0}")]
    Serialization(#[from] serde_json::Error),
}
