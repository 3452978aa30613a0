use super::*;

/// Function for the [`Commands::Remove`] in the CLI.
pub async fn remove<I: UserInteraction>(
  interaction: &I,
  citer: &mut Citer,
  id: &str,
) -> Result<()> {
  let id = id.trim().to_uppercase();

  if !interaction.confirm(&format!("Remove citation {}?", id))? {
    return interaction.reply(ResponseContent::Info("Operation cancelled"));
  }

  match citer.remove(&id).await {
    Ok(()) => interaction.reply(ResponseContent::Success(&format!("Citation {} removed", id))),
    Err(CiterError::NotFound(_)) =>
      interaction.reply(ResponseContent::Warning(&format!("No citation stored under id {}", id))),
    Err(e) => Err(e.into()),
  }
}
