use super::*;

/// Function for the [`Commands::Get`] in the CLI.
pub async fn get<I: UserInteraction>(interaction: &I, citer: &Citer, id: &str) -> Result<()> {
  let id = id.trim().to_uppercase();
  match citer.get(&id).await? {
    Some(stored) => interaction.reply(ResponseContent::Citation(&stored)),
    None =>
      interaction.reply(ResponseContent::Warning(&format!("No citation stored under id {}", id))),
  }
}
