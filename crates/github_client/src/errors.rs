//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when looking up users
//! through the github_client crate. Callers distinguish "no such user" from
//! every other failure, so the variants are kept deliberately coarse.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, UserDirectory};
///
/// match directory.get_user("octocat").await {
///     Ok(profile) => println!("Found {}", profile.display_name()),
///     Err(Error::NotFound) => eprintln!("No such user"),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("API request failed")]
    ApiError(),

    /// The configured API base URL could not be parsed.
    ///
    /// The contained string is the offending value.
    #[error("Invalid GitHub API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// This covers every non-success status other than 404 and rate limiting,
    /// transport failures, and bodies that do not match the expected schema.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// for example when looking up a login that does not exist.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    ///
    /// Unauthenticated requests share a small hourly quota per client address.
    /// No retry is attempted by this crate.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
