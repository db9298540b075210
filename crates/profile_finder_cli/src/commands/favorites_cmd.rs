use clap::Subcommand;
use profile_finder_core::{AddOutcome, FavoriteUser};
use tracing::{debug, info, instrument};

use crate::commands::Session;
use crate::errors::Error;
use crate::output::{format_favorites_pretty, render};

#[cfg(test)]
#[path = "favorites_cmd_tests.rs"]
mod tests;

/// Subcommands for the favorites command
#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// Show the favorites in their saved order
    List {
        /// Output format (json or pretty).
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Look a user up and add them to the favorites
    Add {
        /// GitHub login of the user.
        login: String,
    },

    /// Remove a user from the favorites
    Remove {
        /// Login or numeric id of the favorite.
        user: String,
    },

    /// Move a favorite to a new position
    Move {
        /// Login of the favorite.
        login: String,

        /// New position, starting at 1. Positions past the end move the
        /// favorite to the last place.
        position: usize,
    },
}

/// Execute the favorites command
#[instrument(skip(session))]
pub async fn execute(session: &mut Session, cmd: &FavoritesCommands) -> Result<String, Error> {
    match cmd {
        FavoritesCommands::List { format } => list_favorites(session, format),
        FavoritesCommands::Add { login } => add_favorite(session, login).await,
        FavoritesCommands::Remove { user } => remove_favorite(session, user),
        FavoritesCommands::Move { login, position } => move_favorite(session, login, *position),
    }
}

fn list_favorites(session: &Session, format: &str) -> Result<String, Error> {
    let favorites = session.finder.favorites().snapshot();
    debug!(count = favorites.len(), "Listing favorites");

    render(&favorites.to_vec(), format, |favorites| {
        format_favorites_pretty(favorites)
    })
}

async fn add_favorite(session: &mut Session, login: &str) -> Result<String, Error> {
    let profile = session.finder.lookup(login).await?;
    let user = FavoriteUser::from(&profile);
    let name = user.display_name().to_string();

    match session.finder.favorites_mut().add(user)? {
        AddOutcome::Added => Ok(String::new()),
        AddOutcome::AlreadyPresent => {
            info!(login = %profile.login, "User is already a favorite");
            Ok(format!("{} is already in your favorites.\n", name))
        }
    }
}

fn remove_favorite(session: &mut Session, user: &str) -> Result<String, Error> {
    let id = resolve_favorite(session, user)?;
    session.finder.favorites_mut().remove(id)?;
    Ok(String::new())
}

fn move_favorite(session: &mut Session, login: &str, position: usize) -> Result<String, Error> {
    if position == 0 {
        return Err(Error::InvalidArguments(
            "Position must be at least 1".to_string(),
        ));
    }

    let id = resolve_favorite(session, login)?;
    session
        .finder
        .favorites_mut()
        .move_favorite(id, position - 1)?;

    info!(login = login, position, "Moved favorite");
    Ok(format_favorites_pretty(&session.finder.favorites().snapshot()))
}

/// Finds a favorite by login, falling back to a numeric id.
fn resolve_favorite(session: &Session, user: &str) -> Result<u64, Error> {
    let favorites = session.finder.favorites();
    if let Some(favorite) = favorites.find_by_login(user) {
        return Ok(favorite.id);
    }

    user.parse::<u64>()
        .ok()
        .filter(|id| favorites.is_favorite(*id))
        .ok_or_else(|| profile_finder_core::Error::FavoriteNotFound(user.to_string()).into())
}
