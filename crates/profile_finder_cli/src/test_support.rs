//! Fixtures shared by the command tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use github_client::{UserDirectory, UserProfile};
use tempfile::TempDir;

use crate::{commands::Session, config::AppConfig};

pub(crate) fn profile(id: u64, login: &str, name: Option<&str>) -> UserProfile {
    UserProfile {
        id,
        login: login.to_string(),
        name: name.map(str::to_string),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{}", id),
        html_url: format!("https://github.com/{}", login),
        bio: None,
        company: None,
        location: None,
        blog: None,
        public_repos: 3,
        followers: 10,
        following: 1,
        created_at: None,
    }
}

/// Directory with a fixed set of users; searches return matching logins.
#[derive(Default)]
pub(crate) struct StubDirectory {
    users: HashMap<String, UserProfile>,
    fail_lookups: bool,
}

impl StubDirectory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_user(mut self, user: UserProfile) -> Self {
        self.users.insert(user.login.to_lowercase(), user);
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl UserDirectory for StubDirectory {
    async fn get_user(&self, login: &str) -> Result<UserProfile, github_client::Error> {
        if self.fail_lookups {
            return Err(github_client::Error::RateLimitExceeded);
        }
        self.users
            .get(&login.to_lowercase())
            .cloned()
            .ok_or(github_client::Error::NotFound)
    }

    async fn search_logins(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>, github_client::Error> {
        let query = query.to_lowercase();
        let mut logins: Vec<String> = self
            .users
            .values()
            .filter(|user| user.login.to_lowercase().contains(&query))
            .map(|user| user.login.clone())
            .collect();
        logins.sort();
        logins.truncate(limit);
        Ok(logins)
    }
}

/// Opens a session whose favorites live in a fresh temporary directory.
pub(crate) fn session(directory: StubDirectory) -> (Session, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let session = session_in(directory, &temp_dir);
    (session, temp_dir)
}

/// Opens a session over an existing data directory.
pub(crate) fn session_in(directory: StubDirectory, temp_dir: &TempDir) -> Session {
    let mut config = AppConfig::default();
    config.storage.data_dir = Some(temp_dir.path().to_path_buf());
    config.typeahead.debounce_ms = 10;
    Session::with_directory(Arc::new(directory), &config).expect("Failed to open session")
}
