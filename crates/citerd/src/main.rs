//! Command line interface for the citer citation helper.
//!
//! This crate provides the `citer` binary on top of the `citer` library. It supports:
//! - Writing a configuration and creating the citation database
//! - Generating a citation for a URL and copying it to the clipboard
//! - Listing, showing and removing stored citations
//! - Removing the database altogether
//!
//! # Usage
//!
//! ```bash
//! # Set up configuration and database
//! citer init
//!
//! # Generate a citation and copy it to the clipboard
//! citer cite https://www.rust-lang.org
//!
//! # Show what has been generated so far
//! citer list
//! citer get QWERTY
//!
//! # Forget a citation, or everything
//! citer remove QWERTY
//! citer clean
//! ```
//!
//! Output is colored and destructive operations ask for confirmation. Logging verbosity is raised
//! with `-v` (repeatable) or set through `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use citer::{database::Database, error::CiterError, prelude::*, Citer, Config};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace, warn};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Generate author-date citations from a URL")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses `~/.citer/config.toml`.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so that stdout only carries results.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Entry point for the citer CLI application
///
/// Parses arguments, sets up logging and dispatches to the requested command. Everything except
/// `init` and `clean` needs an initialized configuration.
///
/// # Errors
///
/// Returns [`CiterdError`] for failed metadata requests, empty citations, database failures and
/// failed prompts.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config_path = match &cli.config {
    Some(path) => path.clone(),
    None => Config::default_path()?,
  };
  trace!("Using configuration at: {}", config_path.display());

  let interaction = Terminal::new(cli.accept_defaults);

  match cli.command {
    Commands::Init(init_args) => init(&interaction, &config_path, init_args).await,
    Commands::Clean => clean(&interaction, &config_path).await,
    Commands::HoldClipboard => hold_clipboard(),
    Commands::Cite(cite_args) =>
      cite(&interaction, &mut open_citer(&config_path).await?, cite_args).await,
    Commands::List => list(&interaction, &open_citer(&config_path).await?).await,
    Commands::Get { id } => get(&interaction, &open_citer(&config_path).await?, &id).await,
    Commands::Remove { id } =>
      remove(&interaction, &mut open_citer(&config_path).await?, &id).await,
  }
}

/// Opens the [`Citer`] described by the configuration at `config_path`.
async fn open_citer(config_path: &Path) -> Result<Citer> {
  if !config_path.exists() {
    eprintln!(
      "{} No configuration found at {}! Please run `citer init` first.",
      style(ERROR_PREFIX).red(),
      style(config_path.display()).yellow(),
    );
    return Err(CiterdError::from(CiterError::Config(
      "Configuration not initialized. Run 'citer init' first.".to_string(),
    )));
  }
  Ok(Citer::from_path(config_path).await?)
}
