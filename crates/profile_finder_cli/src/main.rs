use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use profile_finder_cli::commands::{
    config_cmd::{self, ConfigCommands},
    favorites_cmd::{self, FavoritesCommands},
    lookup_cmd::{self, LookupArgs},
    suggest_cmd::{self, SuggestArgs},
    Session,
};
use profile_finder_cli::config::{get_config_path, AppConfig};
use profile_finder_cli::errors::Error;
use profile_finder_cli::output::format_notification;
use profile_finder_core::NotificationKind;

/// GitHub profile finder: look up users and keep a list of favorites
#[derive(Parser)]
#[command(name = "github-profile-finder")]
#[command(about = "Look up GitHub users and manage favorites", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to ./config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a profile by login
    Lookup(LookupArgs),

    /// Suggest logins for a partial input
    Suggest(SuggestArgs),

    #[command(subcommand)]
    Favorites(FavoritesCommands),

    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

/// Runs a command that needs a session and prints its notifications.
///
/// Returns whether an error notification was printed.
async fn run_session_command(cli: &Cli) -> (Result<String, Error>, bool) {
    let config = match AppConfig::load_or_default(&get_config_path(cli.config.as_deref())) {
        Ok(config) => config,
        Err(e) => return (Err(e), false),
    };
    let mut session = match Session::open(&config) {
        Ok(session) => session,
        Err(e) => return (Err(e), false),
    };

    let result = match &cli.command {
        Commands::Lookup(args) => lookup_cmd::execute(&session, args).await,
        Commands::Suggest(args) => suggest_cmd::execute(&session, args).await,
        Commands::Favorites(cmd) => favorites_cmd::execute(&mut session, cmd).await,
        Commands::Config(_) | Commands::Version => Ok(String::new()),
    };

    let mut reported = false;
    for notification in session.drain_notifications() {
        match notification.kind {
            NotificationKind::Info => println!("{}", format_notification(&notification)),
            NotificationKind::Error => {
                reported = true;
                eprintln!("{}", format_notification(&notification));
            }
        }
    }

    (result, reported)
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("PROFILE_FINDER_LOG"))
        .init();

    let cli = Cli::parse();
    let (result, reported) = match &cli.command {
        Commands::Config(cmd) => (config_cmd::execute(cmd, cli.config.as_deref()), false),
        Commands::Version => (
            Ok(format!(
                "github-profile-finder version {}\n",
                env!("CARGO_PKG_VERSION")
            )),
            false,
        ),
        _ => run_session_command(&cli).await,
    };

    match result {
        Ok(output) => {
            print!("{output}");
            std::process::exit(0);
        }
        Err(e) => {
            debug!(error = ?e, "Command failed");
            if !reported {
                eprintln!("{}", format!("Error: {e}").red());
            }
            std::process::exit(1);
        }
    }
}
