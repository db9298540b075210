//! # Models
//!
//! This module contains the data models returned by the GitHub user endpoints.
//!
//! Only the fields the profile finder displays are modelled; everything else in
//! the GitHub payload is ignored during deserialization.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents the public profile of a GitHub user.
///
/// This is the record returned by `GET /users/{login}`. It is transient: a
/// profile is held only while it is displayed and is replaced wholesale by the
/// next lookup.
///
/// # Examples
///
/// ```rust
/// use github_client::models::UserProfile;
///
/// let profile: UserProfile = serde_json::from_str(
///     r#"{"id":583231,"login":"octocat","name":"The Octocat",
///        "avatar_url":"https://avatars.githubusercontent.com/u/583231",
///        "html_url":"https://github.com/octocat",
///        "public_repos":8,"followers":1000,"following":9}"#,
/// ).unwrap();
///
/// assert_eq!(profile.display_name(), "The Octocat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
    /// The display name, if the user has set one
    #[serde(default)]
    pub name: Option<String>,
    /// URL of the user's avatar image
    pub avatar_url: String,
    /// URL of the user's profile page on github.com
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form website field; GitHub returns an empty string when unset
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    /// When the account was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Returns the name to show for this user.
    ///
    /// Falls back to the login when the display name is missing or empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    /// Returns the year the account was created, if GitHub reported it.
    pub fn joined_year(&self) -> Option<i32> {
        self.created_at.map(|created| created.year())
    }

    /// Returns the website field as a usable URL.
    ///
    /// GitHub stores the blog value verbatim, so a bare host such as
    /// `example.com` is prefixed with `https://`. Empty values yield `None`.
    pub fn blog_url(&self) -> Option<String> {
        let blog = self.blog.as_deref()?.trim();
        if blog.is_empty() {
            return None;
        }

        if blog.starts_with("http://") || blog.starts_with("https://") {
            Some(blog.to_string())
        } else {
            Some(format!("https://{}", blog))
        }
    }
}

/// Response from the GitHub user search endpoint (`GET /search/users`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserSearchResults {
    /// Total number of matches known to GitHub, not the number returned
    #[serde(default)]
    pub total_count: u64,
    /// Matching users in GitHub's relevance order
    pub items: Vec<UserSearchItem>,
}

impl UserSearchResults {
    /// Returns up to `limit` logins in the order GitHub returned them.
    pub fn into_logins(self, limit: usize) -> Vec<String> {
        self.items
            .into_iter()
            .take(limit)
            .map(|item| item.login)
            .collect()
    }
}

/// A single user entry in a search response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserSearchItem {
    /// The unique numeric ID of the user
    #[serde(default)]
    pub id: u64,
    /// The login name of the user
    pub login: String,
}
