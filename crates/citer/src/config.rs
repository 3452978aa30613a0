//! On-disk configuration for [`Citer`](crate::Citer).
//!
//! The configuration lives in a TOML file, by default `~/.citer/config.toml`:
//!
//! ```toml
//! endpoint = "https://formatically.com/api/website"
//! fallback_url = "https://formatically.com"
//! database_path = "/home/me/.local/share/citer/citer.db"
//! timeout_secs = 30
//! copy_to_clipboard = true
//!
//! [headers]
//! "User-Agent" = "citer"
//! ```
//!
//! Every key is optional; missing keys take the values of [`Config::default`].

use super::*;

/// Metadata-extraction endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://formatically.com/api/website";

/// Page offered to the user when citation generation fails.
pub const DEFAULT_FALLBACK_URL: &str = "https://formatically.com";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the library and the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// URL the metadata request is posted to.
  pub endpoint:          String,
  /// Page to point users at when generation fails.
  pub fallback_url:      String,
  /// Location of the citation database.
  pub database_path:     PathBuf,
  /// Timeout for the metadata request, in seconds.
  pub timeout_secs:      u64,
  /// Whether generated citations are copied to the clipboard.
  pub copy_to_clipboard: bool,
  /// Extra HTTP headers sent with the metadata request.
  pub headers:           BTreeMap<String, String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      endpoint:          DEFAULT_ENDPOINT.to_string(),
      fallback_url:      DEFAULT_FALLBACK_URL.to_string(),
      database_path:     Database::default_path(),
      timeout_secs:      DEFAULT_TIMEOUT_SECS,
      copy_to_clipboard: true,
      headers:           BTreeMap::new(),
    }
  }
}

impl Config {
  /// Default location of the configuration file, `~/.citer/config.toml`.
  pub fn default_path() -> Result<PathBuf> {
    dirs::home_dir()
      .map(|home| home.join(".citer").join("config.toml"))
      .ok_or_else(|| CiterError::Config("Could not determine the home directory".to_string()))
  }

  /// Reads a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Reads a configuration file, falling back to defaults when it does not exist.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Writes this configuration, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
  }

  /// Sets the metadata endpoint.
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }

  /// Sets the fallback page.
  pub fn with_fallback_url(mut self, fallback_url: impl Into<String>) -> Self {
    self.fallback_url = fallback_url.into();
    self
  }

  /// Sets the database location.
  pub fn with_database_path(mut self, database_path: &Path) -> Self {
    self.database_path = database_path.to_path_buf();
    self
  }

  /// Sets the request timeout in seconds.
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Enables or disables copying to the clipboard.
  pub fn with_copy_to_clipboard(mut self, copy_to_clipboard: bool) -> Self {
    self.copy_to_clipboard = copy_to_clipboard;
    self
  }

  /// Adds an HTTP header to the metadata request.
  pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.insert(key.into(), value.into());
    self
  }

  /// The request timeout as a [`Duration`].
  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}
