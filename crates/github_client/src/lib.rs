//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides an unauthenticated client for the two user endpoints the
//! profile finder needs: looking up a single user by login and searching logins
//! by prefix. Both are exposed through the [`UserDirectory`] trait so callers can
//! substitute their own implementation in tests.

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{Octocrab, Result as OctocrabResult};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{UserProfile, UserSearchItem, UserSearchResults};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Read access to the GitHub user directory.
///
/// Implementations must be cheap to share between tasks; the profile finder
/// holds them behind an `Arc`.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches the public profile for an exact login.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if GitHub has no user with that login,
    /// `Error::RateLimitExceeded` if the anonymous quota is spent, and
    /// `Error::InvalidResponse` for any other failure.
    async fn get_user(&self, login: &str) -> Result<UserProfile, Error>;

    /// Searches for logins matching a partial input.
    ///
    /// Returns at most `limit` logins, in the order GitHub ranked them.
    ///
    /// # Errors
    ///
    /// Returns `Error::RateLimitExceeded` or `Error::InvalidResponse` when the
    /// search request fails.
    async fn search_logins(&self, query: &str, limit: usize) -> Result<Vec<String>, Error>;
}

/// A client for the GitHub user endpoints.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an existing `Octocrab` instance.
    ///
    /// Use [`create_anonymous_client`] to build an instance pointing at the
    /// public API or at a compatible mock server.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Query parameters for `GET /search/users`.
#[derive(Serialize, Debug)]
struct UserSearchQuery {
    q: String,
    per_page: usize,
}

impl UserSearchQuery {
    fn for_login_prefix(query: &str, limit: usize) -> Self {
        Self {
            q: format!("{} in:login", query),
            per_page: limit,
        }
    }
}

#[async_trait]
impl UserDirectory for GitHubClient {
    /// Fetches a user profile using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `login` - The exact login of the user to fetch.
    ///
    /// # Errors
    /// Returns `Error::NotFound` for a 404, whatever its body, and for logins
    /// GitHub could never issue. Otherwise `Error::InvalidResponse` or
    /// `Error::RateLimitExceeded`.
    #[instrument(skip(self), fields(login = %login))]
    async fn get_user(&self, login: &str) -> Result<UserProfile, Error> {
        if !is_valid_login(login) {
            debug!("Login contains characters GitHub does not allow; skipping request");
            return Err(Error::NotFound);
        }

        let path = format!("/users/{}", login);

        // The raw response is used so the status decides the outcome even when
        // the error body is not GitHub's JSON error document.
        debug!("Making API call to: {}", path);
        let response = self
            .client
            ._get(path)
            .await
            .map_err(|e| map_octocrab_error("Failed to get user profile", e))?;
        let status = response.status();
        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|e| map_octocrab_error("Failed to read user profile response", e))?;

        if !status.is_success() {
            return Err(map_status_error("Failed to get user profile", status, &body));
        }

        let profile: UserProfile = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to deserialize user profile");
            Error::InvalidResponse
        })?;
        info!(
            login = profile.login,
            user_id = profile.id,
            "Successfully retrieved user profile"
        );
        Ok(profile)
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search_logins(&self, query: &str, limit: usize) -> Result<Vec<String>, Error> {
        let parameters = UserSearchQuery::for_login_prefix(query, limit);

        let response: OctocrabResult<UserSearchResults> = self
            .client
            .get("/search/users", Some(&parameters))
            .await;
        match response {
            Ok(results) => {
                let logins = results.into_logins(limit);
                debug!(count = logins.len(), "User search returned candidates");
                Ok(logins)
            }
            Err(e) => Err(map_octocrab_error("Failed to search users", e)),
        }
    }
}

/// Creates an unauthenticated `Octocrab` client for the given API base URL.
///
/// # Arguments
///
/// * `base_url` - Root of the GitHub REST API, normally [`DEFAULT_API_BASE_URL`].
///
/// # Errors
///
/// Returns `Error::InvalidBaseUrl` if `base_url` is not an absolute http(s) URL
/// and `Error::ApiError` if the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_anonymous_client, GitHubClient, DEFAULT_API_BASE_URL};
///
/// # fn example() -> Result<(), github_client::Error> {
/// let octocrab = create_anonymous_client(DEFAULT_API_BASE_URL)?;
/// let client = GitHubClient::new(octocrab);
/// # Ok(())
/// # }
/// ```
#[instrument]
pub fn create_anonymous_client(base_url: &str) -> Result<Octocrab, Error> {
    let parsed = Url::parse(base_url).map_err(|e| {
        error!(base_url = base_url, error = %e, "Failed to parse GitHub API base URL");
        Error::InvalidBaseUrl(base_url.to_string())
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        error!(
            base_url = base_url,
            scheme = parsed.scheme(),
            "GitHub API base URL must use http or https"
        );
        return Err(Error::InvalidBaseUrl(base_url.to_string()));
    }

    Octocrab::builder()
        .base_uri(base_url)
        .map_err(|e| {
            error!(base_url = base_url, error = ?e, "Failed to set Octocrab base URI");
            Error::InvalidBaseUrl(base_url.to_string())
        })?
        .build()
        .map_err(|e| {
            error!(error = ?e, "Failed to build Octocrab client");
            Error::ApiError()
        })
}

fn is_rate_limited(status: StatusCode, message: &str) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && message.to_lowercase().contains("rate limit"))
}

/// GitHub logins consist of ASCII letters, digits and hyphens.
///
/// Anything else cannot name a user and must not be spliced into a request
/// path, where `?`, `#` or `/` would address a different resource.
fn is_valid_login(login: &str) -> bool {
    !login.is_empty() && login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn map_status_error(message: &str, status: StatusCode, body: &str) -> Error {
    if status == StatusCode::NOT_FOUND {
        debug!("{}. Not found", message);
        return Error::NotFound;
    }

    if is_rate_limited(status, body) {
        warn!(
            status = status.as_u16(),
            "{}. GitHub rate limit exceeded",
            message
        );
        return Error::RateLimitExceeded;
    }

    error!(
        status = status.as_u16(),
        body = body,
        "{}. Received an error from GitHub",
        message
    );
    Error::InvalidResponse
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    if let octocrab::Error::GitHub { source, .. } = &e {
        if source.status_code == StatusCode::NOT_FOUND {
            debug!(error_message = source.message, "{}. Not found", message);
            return Error::NotFound;
        }

        if is_rate_limited(source.status_code, &source.message) {
            warn!(
                status = source.status_code.as_u16(),
                error_message = source.message,
                "{}. GitHub rate limit exceeded",
                message
            );
            return Error::RateLimitExceeded;
        }
    }

    log_octocrab_error(message, e);
    Error::InvalidResponse
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                status = err.status_code.as_u16(),
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
