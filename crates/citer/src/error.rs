//! Error types for the citer library.
//!
//! The formatter itself never fails. Everything around it (the remote service, the local store,
//! the clipboard, configuration files) reports failures through [`CiterError`].
//!
//! # Examples
//!
//! ```no_run
//! use citer::{error::CiterError, prelude::*, Citer, Config};
//!
//! # async fn example() -> Result<(), CiterError> {
//! let mut citer = Citer::from_config(Config::default()).await?;
//! match citer.cite("https://example.com", &mut NoClipboard).await {
//!   Err(CiterError::EmptyCitation) => println!("Nothing to cite"),
//!   Err(CiterError::Network(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(stored) => println!("{}", stored.citation),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`citer`](crate) crate.
pub type Result<T> = core::result::Result<T, CiterError>;

/// Errors that can occur while generating, storing or copying citations.
#[derive(Error, Debug)]
pub enum CiterError {
  /// The input is not an absolute `http`/`https` URL.
  ///
  /// The string parameter contains the rejected input.
  #[error("Invalid URL: {0}")]
  InvalidUrl(String),

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The extraction service is unreachable
  /// - The request times out
  /// - TLS errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The extraction service answered with a non-success status.
  ///
  /// The string parameter contains the status and response body.
  #[error("API error: {0}")]
  ApiError(String),

  /// The metadata produced no author, title, container, date or URL, so there is nothing to cite.
  #[error("Could not generate citation")]
  EmptyCitation,

  /// Every generated id collided with an existing citation.
  ///
  /// The parameter is the number of ids that were tried.
  #[error("Could not find a free citation id after {0} attempts")]
  IdsExhausted(usize),

  /// No stored citation has the given id.
  #[error("No citation stored under id {0}")]
  NotFound(String),

  /// A SQLite operation failed.
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A JSON payload could not be (de)serialized.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be written as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The system clipboard was unavailable or rejected the text.
  #[error(transparent)]
  Clipboard(#[from] arboard::Error),

  /// The configuration is missing or inconsistent.
  #[error("{0}")]
  Config(String),
}
