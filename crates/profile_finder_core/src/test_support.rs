//! Hand-written `UserDirectory` double shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use github_client::{Error as GitHubError, UserDirectory, UserProfile};

pub(crate) fn profile(id: u64, login: &str, name: Option<&str>) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "login": login,
        "name": name,
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
        "html_url": format!("https://github.com/{login}"),
        "public_repos": 8,
        "followers": 1000,
        "following": 9
    }))
    .expect("valid profile fixture")
}

/// Serves fixed profiles and synthesises search results from the query.
#[derive(Default)]
pub(crate) struct MockDirectory {
    users: HashMap<String, UserProfile>,
    broken_logins: HashSet<String>,
    lookup_delays: HashMap<String, Duration>,
    search_result_count: usize,
    search_delay: Duration,
    search_fails: bool,
    lookups: Mutex<Vec<String>>,
    searches: Mutex<Vec<String>>,
}

impl MockDirectory {
    pub(crate) fn new() -> Self {
        Self {
            search_result_count: 3,
            ..Default::default()
        }
    }

    pub(crate) fn with_user(mut self, profile: UserProfile) -> Self {
        self.users.insert(profile.login.clone(), profile);
        self
    }

    /// Lookups of `login` fail with a non-404 error.
    pub(crate) fn with_broken_login(mut self, login: &str) -> Self {
        self.broken_logins.insert(login.to_string());
        self
    }

    pub(crate) fn with_lookup_delay(mut self, login: &str, delay: Duration) -> Self {
        self.lookup_delays.insert(login.to_string(), delay);
        self
    }

    pub(crate) fn with_search_result_count(mut self, count: usize) -> Self {
        self.search_result_count = count;
        self
    }

    pub(crate) fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub(crate) fn with_failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }

    pub(crate) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub(crate) fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserDirectory for MockDirectory {
    async fn get_user(&self, login: &str) -> Result<UserProfile, GitHubError> {
        self.lookups.lock().unwrap().push(login.to_string());

        if let Some(delay) = self.lookup_delays.get(login) {
            tokio::time::sleep(*delay).await;
        }

        if self.broken_logins.contains(login) {
            return Err(GitHubError::InvalidResponse);
        }

        self.users.get(login).cloned().ok_or(GitHubError::NotFound)
    }

    async fn search_logins(&self, query: &str, _limit: usize) -> Result<Vec<String>, GitHubError> {
        self.searches.lock().unwrap().push(query.to_string());

        if !self.search_delay.is_zero() {
            tokio::time::sleep(self.search_delay).await;
        }

        if self.search_fails {
            return Err(GitHubError::InvalidResponse);
        }

        // Returns the configured count regardless of the limit.
        Ok((1..=self.search_result_count)
            .map(|i| format!("{query}-{i}"))
            .collect())
    }
}
