//! Terminal rendering for profiles, favorites, suggestions and notifications.
//!
//! Every renderer returns a `String`; the commands decide where it is printed.

use colored::Colorize;
use github_client::UserProfile;
use profile_finder_core::{FavoriteUser, Notification, NotificationKind};
use serde::Serialize;

use crate::errors::Error;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Shown by `suggest` when the directory returned nothing.
pub const NO_SUGGESTIONS: &str = "No results found.";

/// Shown by `favorites list` when the collection is empty.
pub const NO_FAVORITES: &str = "No favorites yet";

/// A displayed profile together with its favorite status.
#[derive(Debug, Serialize)]
pub struct ProfileView<'a> {
    #[serde(flatten)]
    pub profile: &'a UserProfile,
    pub favorite: bool,
}

/// Renders `value` as pretty JSON, or with `pretty` when `format` is "pretty".
pub fn render<T: Serialize>(
    value: &T,
    format: &str,
    pretty: impl FnOnce(&T) -> String,
) -> Result<String, Error> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(value)?),
        "pretty" => Ok(pretty(value)),
        _ => Err(Error::InvalidArguments(format!(
            "Invalid format: '{}'. Use 'json' or 'pretty'.",
            format
        ))),
    }
}

/// Formats a profile card.
pub fn format_profile_pretty(view: &ProfileView<'_>) -> String {
    let profile = view.profile;
    let mut output = String::new();

    let marker = if view.favorite {
        format!("  {}", "★ Favorite".yellow())
    } else {
        String::new()
    };
    output.push_str(&format!(
        "\n{} {}{}\n",
        profile.display_name().bold().bright_cyan(),
        format!("@{}", profile.login).dimmed(),
        marker
    ));

    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
        output.push_str(&format!("{}\n", bio));
    }
    output.push('\n');

    if let Some(location) = profile.location.as_deref().filter(|l| !l.is_empty()) {
        output.push_str(&format!("{}: {}\n", "Location".bold(), location));
    }
    if let Some(company) = profile.company.as_deref().filter(|c| !c.is_empty()) {
        output.push_str(&format!("{}: {}\n", "Company".bold(), company));
    }
    if let Some(blog) = profile.blog_url() {
        output.push_str(&format!("{}: {}\n", "Blog".bold(), blog));
    }
    if let Some(year) = profile.joined_year() {
        output.push_str(&format!("Joined {}\n", year));
    }

    output.push_str(&format!(
        "\n{} Repositories  {} Followers  {} Following\n",
        profile.public_repos.to_string().bold(),
        profile.followers.to_string().bold(),
        profile.following.to_string().bold()
    ));
    output.push_str(&format!("\n{}\n", profile.html_url.blue()));

    output
}

/// Formats the favorites in display order, numbered from 1.
pub fn format_favorites_pretty(favorites: &[FavoriteUser]) -> String {
    if favorites.is_empty() {
        return format!("{}\n", NO_FAVORITES.dimmed());
    }

    let mut output = format!("{}\n", "Favorite Users".bold());
    for (index, user) in favorites.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {} {}\n",
            index + 1,
            user.display_name().bold(),
            format!("@{}", user.login).dimmed()
        ));
    }
    output
}

/// Formats suggestion candidates, one per line.
pub fn format_suggestions(candidates: &[String]) -> String {
    if candidates.is_empty() {
        return format!("{}\n", NO_SUGGESTIONS);
    }

    candidates
        .iter()
        .map(|login| format!("{}\n", login))
        .collect()
}

/// Formats a notification; errors are shown in red.
pub fn format_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Info => format!(
            "{} {}",
            format!("{}:", notification.title).green().bold(),
            notification.description
        ),
        NotificationKind::Error => format!(
            "{} {}",
            format!("{}:", notification.title).red().bold(),
            notification.description.red()
        ),
    }
}
