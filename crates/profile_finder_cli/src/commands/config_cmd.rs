use clap::Subcommand;
use tracing::{debug, error, info, instrument};

use crate::config::{get_config_path, AppConfig};
use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show the effective configuration
    Show {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },
}

/// Execute the config command
///
/// `default_path` is the global `--config` value, used when the subcommand
/// has no `--path` of its own.
#[instrument]
pub fn execute(cmd: &ConfigCommands, default_path: Option<&str>) -> Result<String, Error> {
    match cmd {
        ConfigCommands::Init { path } => init_config(path.as_deref().or(default_path)),
        ConfigCommands::Show { path } => show_config(path.as_deref().or(default_path)),
    }
}

/// Initialize a new configuration file
#[instrument]
fn init_config(path: Option<&str>) -> Result<String, Error> {
    let config_path = get_config_path(path);
    debug!(message = "Initializing configuration", path = ?config_path);

    if config_path.exists() {
        let err = Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        ));
        error!(
            message = "Configuration file already exists",
            path = ?config_path,
            error = ?err
        );
        return Err(err);
    }

    AppConfig::default().save(&config_path).map_err(|e| {
        error!(message = "Failed to save configuration", path = ?config_path, error = ?e);
        e
    })?;

    info!(message = "Configuration initialized", path = ?config_path);
    Ok(format!("Configuration initialized at {:?}\n", config_path))
}

/// Print the configuration in effect, defaults included
#[instrument]
fn show_config(path: Option<&str>) -> Result<String, Error> {
    let config_path = get_config_path(path);
    debug!(message = "Showing configuration", path = ?config_path);

    let config = AppConfig::load_or_default(&config_path).map_err(|e| {
        error!(message = "Failed to load configuration", path = ?config_path, error = ?e);
        e
    })?;

    let mut content = toml::to_string_pretty(&config)
        .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;
    if config.storage.data_dir.is_none() {
        content.push_str(&format!(
            "\n# favorites are stored in {:?}\n",
            config.data_dir()
        ));
    }
    Ok(content)
}
