//! Module for the "list" command.

use super::*;

/// Function for the [`Commands::List`] in the CLI.
pub async fn list<I: UserInteraction>(interaction: &I, citer: &Citer) -> Result<()> {
  let citations = citer.list().await?;
  trace!("Listing {} stored citations", citations.len());

  if citations.is_empty() {
    interaction.reply(ResponseContent::Info("No citations stored yet"))
  } else {
    interaction.reply(ResponseContent::Citations(&citations))
  }
}
