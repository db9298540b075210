//! Command modules for the profile finder CLI.
//!
//! Each submodule handles one command category:
//!
//! - `config_cmd`: create and inspect the configuration file
//! - `favorites_cmd`: list, add, remove and reorder favorites
//! - `lookup_cmd`: look up a single profile by login
//! - `suggest_cmd`: login suggestions for a partial input
//!
//! Commands return their output as a `String`; notifications raised while a
//! command runs are collected in the [`Session`] and printed by `main`.

use std::sync::Arc;

use github_client::{create_anonymous_client, GitHubClient, UserDirectory};
use profile_finder_core::{FileStore, Notification, NotificationLog, ProfileFinder};
use tracing::debug;

use crate::{config::AppConfig, errors::Error};

pub mod config_cmd;
pub mod favorites_cmd;
pub mod lookup_cmd;
pub mod suggest_cmd;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Everything a command needs: the finder and the notifications it emitted.
pub struct Session {
    pub finder: ProfileFinder<FileStore>,
    notifications: Arc<NotificationLog>,
}

impl Session {
    /// Opens a session against the GitHub API configured in `config`.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base URL is invalid or the stored favorites
    /// cannot be read.
    pub fn open(config: &AppConfig) -> Result<Self, Error> {
        let client = create_anonymous_client(&config.api.base_url)?;
        Self::with_directory(Arc::new(GitHubClient::new(client)), config)
    }

    /// Opens a session over an arbitrary user directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored favorites cannot be read.
    pub fn with_directory(
        directory: Arc<dyn UserDirectory>,
        config: &AppConfig,
    ) -> Result<Self, Error> {
        let data_dir = config.data_dir();
        debug!(data_dir = ?data_dir, "Opening profile finder session");

        let notifications = Arc::new(NotificationLog::new());
        let finder = ProfileFinder::new(
            directory,
            FileStore::new(data_dir),
            notifications.clone(),
            config.typeahead_settings(),
        )?;

        Ok(Self {
            finder,
            notifications,
        })
    }

    /// Removes and returns the notifications raised so far.
    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
