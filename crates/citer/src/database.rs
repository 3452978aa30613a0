//! Local SQLite storage for generated citations.
//!
//! Every generated citation is kept as a flat key-value record: a six-letter identifier mapping to
//! the citation line and the title of the cited item, plus the time it was stored.
//!
//! The schema is created automatically when a database is opened.
//!
//! # Examples
//!
//! ```no_run
//! use citer::{
//!   database::{generate_id, CitationStore, Database, StoredCitation},
//!   format::Citation,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open(Database::default_path()).await?;
//!
//! let citation = Citation { citation: "Doe, Jane.".into(), title: String::new() };
//! db.insert(&StoredCitation::new(generate_id(), citation)).await?;
//!
//! for stored in db.all().await? {
//!   println!("{}: {}", stored.id, stored.citation);
//! }
//! # Ok(())
//! # }
//! ```

use rand::Rng;
use rusqlite::params;
use tokio_rusqlite::Connection;

use super::*;


/// Alphabet the citation identifiers are drawn from.
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a citation identifier.
pub const ID_LENGTH: usize = 6;

/// Generates a random identifier of [`ID_LENGTH`] uppercase ASCII letters.
pub fn generate_id() -> String {
  let mut rng = rand::rng();
  (0..ID_LENGTH).map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char).collect()
}

/// A citation as kept in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCitation {
  /// Short random identifier, see [`generate_id`].
  pub id:         String,
  /// The citation line.
  pub citation:   String,
  /// Title of the cited item.
  pub title:      String,
  /// When the citation was stored.
  pub created_at: DateTime<Utc>,
}

impl StoredCitation {
  /// Wraps a freshly formatted citation under `id`, stamped with the current time.
  pub fn new(id: impl Into<String>, citation: Citation) -> Self {
    Self {
      id:         id.into(),
      citation:   citation.citation,
      title:      citation.title,
      created_at: Utc::now(),
    }
  }

  /// The `{citation, title}` pair this record was created from.
  pub fn as_citation(&self) -> Citation {
    Citation { citation: self.citation.clone(), title: self.title.clone() }
  }
}

/// A key-value store for generated citations.
#[async_trait]
pub trait CitationStore: Send + Sync {
  /// Stores `citation` under its id.
  ///
  /// Returns `false` without touching the store when the id is already taken.
  async fn insert(&mut self, citation: &StoredCitation) -> Result<bool>;

  /// Looks up a stored citation by id.
  async fn get(&self, id: &str) -> Result<Option<StoredCitation>>;

  /// All stored citations, newest first.
  async fn all(&self) -> Result<Vec<StoredCitation>>;

  /// Removes a stored citation. Returns whether anything was removed.
  async fn remove(&mut self, id: &str) -> Result<bool>;
}

/// Handle for the SQLite citation store.
pub struct Database {
  /// Async SQLite connection handle
  conn: Connection,
}

impl Database {
  /// Opens an existing database or creates a new one at `path`, including missing parent
  /// directories, and makes sure the schema exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await?;
    }
    debug!("Opening citation database at {}", path.display());

    let conn = Connection::open(path).await?;
    conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(())
      })
      .await?;

    Ok(Self { conn })
  }

  /// Returns the default path for the database file.
  ///
  /// - On Unix: `~/.local/share/citer/citer.db`
  /// - On macOS: `~/Library/Application Support/citer/citer.db`
  /// - On Windows: `%APPDATA%\citer\citer.db`
  /// - Fallback: `./citer/citer.db`
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("citer").join("citer.db")
  }
}

#[async_trait]
impl CitationStore for Database {
  async fn insert(&mut self, citation: &StoredCitation) -> Result<bool> {
    let citation = citation.clone();
    let inserted = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(
          "INSERT OR IGNORE INTO citations (id, citation, title, created_at)
           VALUES (?1, ?2, ?3, ?4)",
        )?;
        let changed = stmt.execute(params![
          &citation.id,
          &citation.citation,
          &citation.title,
          &citation.created_at,
        ])?;
        Ok(changed == 1)
      })
      .await?;
    trace!("Insert into citations changed rows: {}", inserted);
    Ok(inserted)
  }

  async fn get(&self, id: &str) -> Result<Option<StoredCitation>> {
    let id = id.to_string();
    self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(
          "SELECT id, citation, title, created_at FROM citations WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_citation) {
          Ok(citation) => Ok(Some(citation)),
          Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
          Err(e) => Err(e.into()),
        }
      })
      .await
      .map_err(CiterError::from)
  }

  async fn all(&self) -> Result<Vec<StoredCitation>> {
    self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare_cached(
          "SELECT id, citation, title, created_at FROM citations
           ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt.query_map([], row_to_citation)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
      })
      .await
      .map_err(CiterError::from)
  }

  async fn remove(&mut self, id: &str) -> Result<bool> {
    let id = id.to_string();
    let removed = self
      .conn
      .call(move |conn| {
        let changed = conn.execute("DELETE FROM citations WHERE id = ?1", params![id])?;
        Ok(changed > 0)
      })
      .await?;
    Ok(removed)
  }
}

/// Maps a `citations` row onto a [`StoredCitation`].
fn row_to_citation(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredCitation> {
  Ok(StoredCitation {
    id:         row.get(0)?,
    citation:   row.get(1)?,
    title:      row.get(2)?,
    created_at: row.get(3)?,
  })
}
