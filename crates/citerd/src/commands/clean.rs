//! Module for the "clean" command, which deletes the citation database.

use super::*;

/// Function for the [`Commands::Clean`] in the CLI.
///
/// Asks twice before deleting: a yes/no confirmation, then typing `DELETE`. SQLite side files
/// (`-wal`, `-shm`, `-journal`) next to the database are removed as well.
pub async fn clean<I: UserInteraction>(interaction: &I, config_path: &Path) -> Result<()> {
  let config = Config::load_or_default(config_path)?;
  let path = config.database_path;

  if !path.exists() {
    return interaction
      .reply(ResponseContent::Warning(&format!("No database found at: {}", path.display())));
  }

  interaction.reply(ResponseContent::Warning(&format!("Database found at: {}", path.display())))?;

  if !interaction.confirm("Are you sure you want to delete this database?")? {
    return interaction.reply(ResponseContent::Info("Operation cancelled"));
  }

  if !interaction.confirm_typed("Type DELETE to confirm deletion", "DELETE")? {
    return interaction.reply(ResponseContent::Info("Operation cancelled"));
  }

  let side_files = glob::glob(&format!("{}-*", glob::Pattern::escape(&path.to_string_lossy())))?;

  interaction.reply(ResponseContent::Working(&format!("Removing database: {}", path.display())))?;
  std::fs::remove_file(&path)?;

  for file in side_files.flatten() {
    debug!("Removing database side file {}", file.display());
    std::fs::remove_file(file)?;
  }

  interaction.reply(ResponseContent::Success("Database files cleaned"))
}
