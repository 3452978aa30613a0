//! Author-date citation generation from a URL.
//!
//! `citer` turns the bibliographic metadata that a metadata-extraction service returns for a web
//! page into a single citation string, keeps a short record of every generated citation, and hands
//! the result to the system clipboard.
//!
//! # Features
//!
//! - **Pure formatting core**: [`format::format`] maps a [`record::BibliographicRecord`] to a
//!   [`format::Citation`] without side effects
//! - **Remote metadata**: [`retriever::Retriever`] posts the URL to the extraction service
//! - **Local record keeping**: [`database::Database`] stores citations under short random ids
//! - **Clipboard**: [`clipboard::SystemClipboard`] copies the finished citation
//!
//! The network, the store and the clipboard are all traits ([`retriever::MetadataSource`],
//! [`database::CitationStore`], [`clipboard::ClipboardSink`]) so the flow in
//! [`generate::generate`] can run against any implementation.
//!
//! # Getting Started
//!
//! ```no_run
//! use citer::{prelude::*, Citer, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let mut citer = Citer::from_config(Config::default()).await?;
//!   let stored = citer.cite("https://example.com", &mut NoClipboard).await?;
//!   println!("{}", stored.citation);
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`record`]: Input metadata as delivered by the extraction service
//! - [`format`]: The citation formatter
//! - [`retriever`]: HTTP client for the extraction service
//! - [`database`]: SQLite-backed citation store
//! - [`clipboard`]: Clipboard capability
//! - [`generate`]: The end-to-end generate flow
//! - [`config`]: On-disk configuration

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::BTreeMap,
  path::{Path, PathBuf},
  time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod clipboard;
pub mod config;
pub mod database;
pub mod error;
pub mod format;
pub mod generate;
pub mod record;
pub mod retriever;

pub use crate::config::Config;
use crate::{
  clipboard::{ClipboardSink, NoClipboard},
  database::{CitationStore, Database, StoredCitation},
  error::*,
  format::Citation,
  record::{BibliographicRecord, Creator},
  retriever::{MetadataSource, Retriever},
};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use citer::prelude::*;
///
/// fn copy(sink: &mut impl ClipboardSink) -> Result<(), CiterError> { sink.copy("Doe, Jane.") }
/// ```
pub mod prelude {
  pub use crate::{
    clipboard::{ClipboardSink, DetachedClipboard, NoClipboard, SystemClipboard},
    database::CitationStore,
    error::CiterError,
    retriever::MetadataSource,
  };
}

/// Everything a citation session needs: configuration, the remote retriever and the local store.
pub struct Citer {
  /// Configuration this instance was built from.
  pub config:    Config,
  /// Client for the metadata-extraction service.
  pub retriever: Retriever,
  /// Store holding generated citations.
  pub database:  Database,
}

impl Citer {
  /// Builds a [`Citer`] from a configuration, opening (and creating if needed) its database.
  pub async fn from_config(config: Config) -> Result<Self> {
    let retriever = Retriever::from_config(&config)?;
    let database = Database::open(&config.database_path).await?;
    Ok(Self { config, retriever, database })
  }

  /// Loads the configuration at `path` and builds a [`Citer`] from it.
  pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    Self::from_config(Config::load(path)?).await
  }

  /// Generates, stores and copies a citation for `url`.
  ///
  /// The clipboard is only touched when [`Config::copy_to_clipboard`] is set.
  pub async fn cite<C: ClipboardSink + ?Sized>(
    &mut self,
    url: &str,
    clipboard: &mut C,
  ) -> Result<StoredCitation> {
    if self.config.copy_to_clipboard {
      generate::generate(&self.retriever, &mut self.database, clipboard, url).await
    } else {
      generate::generate(&self.retriever, &mut self.database, &mut NoClipboard, url).await
    }
  }

  /// All stored citations, newest first.
  pub async fn list(&self) -> Result<Vec<StoredCitation>> { self.database.all().await }

  /// A single stored citation by id.
  pub async fn get(&self, id: &str) -> Result<Option<StoredCitation>> {
    self.database.get(id).await
  }

  /// Removes a stored citation, failing with [`CiterError::NotFound`] for an unknown id.
  pub async fn remove(&mut self, id: &str) -> Result<()> {
    if self.database.remove(id).await? {
      Ok(())
    } else {
      Err(CiterError::NotFound(id.to_string()))
    }
  }
}
