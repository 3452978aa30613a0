//! Module for the "cite" command: the full generate flow for a single URL.

use super::*;

/// Arguments that can be used for the [`Commands::Cite`]
#[derive(Args, Clone)]
pub struct CiteArgs {
  /// Page to cite, e.g. "https://www.rust-lang.org"
  pub url: String,

  /// Do not copy the citation to the clipboard
  #[arg(long)]
  pub no_copy: bool,
}

/// Function for the [`Commands::Cite`] in the CLI.
///
/// On failure the user is pointed at the configured fallback page and the error is returned so
/// the process exits unsuccessfully.
pub async fn cite<I: UserInteraction>(
  interaction: &I,
  citer: &mut Citer,
  cite_args: CiteArgs,
) -> Result<()> {
  let CiteArgs { url, no_copy } = cite_args;
  interaction.reply(ResponseContent::Working(&format!("Generating citation for {}", url)))?;

  let wants_copy = citer.config.copy_to_clipboard && !no_copy;
  let (result, copied) = if wants_copy {
    match citation_clipboard() {
      Ok(mut clipboard) => (citer.cite(&url, clipboard.as_mut()).await, true),
      Err(e) => {
        warn!("Clipboard unavailable: {}", e);
        interaction.reply(ResponseContent::Warning("Clipboard unavailable, not copying"))?;
        (citer.cite(&url, &mut NoClipboard).await, false)
      },
    }
  } else {
    (citer.cite(&url, &mut NoClipboard).await, false)
  };

  match result {
    Ok(stored) => {
      debug!("Generated citation {}", stored.id);
      interaction.reply(ResponseContent::Citation(&stored))?;
      interaction.reply(ResponseContent::Success("Generated citation!"))?;
      if copied {
        interaction.reply(ResponseContent::Info("Copied citation to clipboard"))?;
      }
      Ok(())
    },
    Err(e) => {
      interaction.reply(ResponseContent::Error(&format!("Citation generation failed: {}", e)))?;
      interaction.reply(ResponseContent::Info(&format!(
        "Try the online version here: {}",
        citer.config.fallback_url
      )))?;
      Err(e.into())
    },
  }
}
