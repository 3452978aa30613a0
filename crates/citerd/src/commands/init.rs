//! Module for setting up a citer configuration and database

use super::*;

/// Arguments that can be used for the [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitArgs {
  /// Metadata-extraction endpoint to post URLs to
  #[arg(long)]
  pub endpoint: Option<String>,

  /// Where to keep the citation database
  #[arg(long)]
  pub db_path: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
pub async fn init<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  init_args: InitArgs,
) -> Result<()> {
  let InitArgs { endpoint, db_path } = init_args;

  if config_path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {:?}, do you want to overwrite it?",
      config_path
    ))?
  {
    return interaction.reply(ResponseContent::Info("Keeping the existing configuration"));
  }

  let mut config = Config::default();
  if let Some(endpoint) = endpoint {
    config = config.with_endpoint(endpoint);
  }

  config = if let Some(db_path) = db_path {
    config.with_database_path(&db_path)
  } else if interaction.confirm(&format!(
    "Would you like to use the default path {:?} for storing citations?",
    Database::default_path(),
  ))? {
    config
  } else {
    return interaction.reply(ResponseContent::Info(
      "Please pass in your intended database path using --db-path",
    ));
  };

  config.save(config_path)?;
  Citer::from_config(config.clone()).await?;
  debug!("Initialized citer with {:?}", config);

  interaction.reply(ResponseContent::Success(&format!(
    "Citer initialized successfully\nConfig path: {:?}\nDatabase path: {:?}\nEndpoint: {}",
    config_path, config.database_path, config.endpoint,
  )))
}
