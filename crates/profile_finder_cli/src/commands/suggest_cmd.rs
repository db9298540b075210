use clap::Args;
use tracing::{debug, instrument};

use crate::commands::Session;
use crate::errors::Error;
use crate::output::format_suggestions;

#[cfg(test)]
#[path = "suggest_cmd_tests.rs"]
mod tests;

/// Arguments for the suggest command.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial login to complete.
    pub partial: String,
}

/// Feeds `partial` to the typeahead and prints the settled candidates.
#[instrument(skip(session))]
pub async fn execute(session: &Session, args: &SuggestArgs) -> Result<String, Error> {
    let typeahead = session.finder.typeahead();
    typeahead.input(&args.partial);

    let snapshot = typeahead.settled().await;
    debug!(count = snapshot.candidates.len(), "Suggestions settled");

    Ok(format_suggestions(&snapshot.candidates))
}
