use clap::Args;
use tracing::{info, instrument};

use crate::commands::Session;
use crate::errors::Error;
use crate::output::{format_profile_pretty, render, ProfileView};

#[cfg(test)]
#[path = "lookup_cmd_tests.rs"]
mod tests;

/// Arguments for the lookup command.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// GitHub login to look up.
    pub login: String,

    /// Output format (json or pretty).
    #[arg(long, default_value = "pretty")]
    pub format: String,
}

/// Looks up a profile and renders it.
///
/// A failed lookup has already been reported as a notification; the error is
/// returned so the process exits with a failure code.
#[instrument(skip(session))]
pub async fn execute(session: &Session, args: &LookupArgs) -> Result<String, Error> {
    let profile = session.finder.lookup(&args.login).await?;
    let favorite = session.finder.favorites().is_favorite(profile.id);
    info!(login = %profile.login, favorite, "Profile found");

    render(
        &ProfileView {
            profile: &profile,
            favorite,
        },
        &args.format,
        format_profile_pretty,
    )
}
