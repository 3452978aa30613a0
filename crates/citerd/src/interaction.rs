//! Terminal interaction: prompts and styled replies.

use citer::database::StoredCitation;
use dialoguer::{Confirm, Input};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for messages about work in progress
pub static WORKING_PREFIX: &str = "» ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Prefix for list items
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last list item
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Continuation line under a list item
pub static CONTINUE_PREFIX: &str = "│  ";

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A single citation with all of its details.
  Citation(&'a StoredCitation),
  /// A summary listing of citations.
  Citations(&'a [StoredCitation]),
  /// Work that is about to start.
  Working(&'a str),
  /// A completed operation.
  Success(&'a str),
  /// A failed operation.
  Error(&'a str),
  /// Something worth pointing out that is not a failure.
  Warning(&'a str),
  /// Plain information.
  Info(&'a str),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks the user to type `expected` exactly, returning whether they did.
  fn confirm_typed(&self, message: &str, expected: &str) -> Result<bool>;
  /// Shows a reply.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction through the terminal, using `dialoguer` for prompts and `console` for styling.
pub struct Terminal {
  /// Answer every prompt with its default instead of asking.
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction; with `accept_defaults` every confirmation is answered "yes".
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .default(false)
        .wait_for_newline(true)
        .interact()?,
    )
  }

  fn confirm_typed(&self, message: &str, expected: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    let input = Input::<String>::new()
      .with_prompt(format!("{}{}", style(PROMPT_PREFIX).red(), message))
      .interact_text()?;
    Ok(input == expected)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Citation(stored) => {
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(&stored.citation).white().bold());
        println!("   {} {}", style("Id:").green().bold(), style(&stored.id).yellow());
        if !stored.title.is_empty() {
          println!("   {} {}", style("Title:").green().bold(), style(&stored.title).white());
        }
        println!(
          "   {} {}",
          style("Created:").green().bold(),
          style(stored.created_at.format("%Y-%m-%d %H:%M:%S UTC")).white()
        );
      },
      ResponseContent::Citations(citations) => {
        println!("{} Found {} citation(s):", style(INFO_PREFIX).blue(), citations.len());
        for (index, stored) in citations.iter().enumerate() {
          let last = index + 1 == citations.len();
          let (prefix, continuation) =
            if last { (LAST_ITEM_PREFIX, "   ") } else { (ITEM_PREFIX, CONTINUE_PREFIX) };
          let title = if stored.title.is_empty() { "(untitled)" } else { stored.title.as_str() };
          println!("{} {} {}", style(prefix).dim(), style(&stored.id).yellow(), style(title).bold());
          println!("{}{}", style(continuation).dim(), stored.citation);
        }
      },
      ResponseContent::Working(message) =>
        println!("{} {}", style(WORKING_PREFIX).cyan(), message),
      ResponseContent::Success(message) =>
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Error(message) =>
        println!("{} {}", style(ERROR_PREFIX).red(), style(message).red()),
      ResponseContent::Warning(message) =>
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).blue(), message),
    }
    Ok(())
  }
}
