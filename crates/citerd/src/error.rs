//! Error type for the `citer` binary.

use thiserror::Error;

use super::*;

/// Result alias used throughout the binary.
pub type Result<T> = core::result::Result<T, CiterdError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CiterdError {
  /// Any failure coming from the `citer` library.
  #[error(transparent)]
  Citer(#[from] CiterError),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// An interactive prompt failed.
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// A glob pattern used to find database files was invalid.
  #[error(transparent)]
  Glob(#[from] glob::PatternError),
}
