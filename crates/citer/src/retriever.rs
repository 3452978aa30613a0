//! Client for the metadata-extraction service.
//!
//! The service takes a page URL and answers with the page's bibliographic metadata:
//!
//! ```text
//! POST /api/website
//! Content-Type: application/json
//!
//! {"url": "https://example.com"}
//! ```
//!
//! The response body is a JSON [`BibliographicRecord`].
//!
//! # Examples
//!
//! ```no_run
//! use citer::{prelude::*, retriever::Retriever, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let retriever = Retriever::from_config(&Config::default())?;
//! let record = retriever.fetch("https://www.rust-lang.org").await?;
//! println!("Title: {}", record.title);
//! # Ok(())
//! # }
//! ```

use super::*;

/// Anything that can produce bibliographic metadata for a URL.
///
/// [`Retriever`] is the production implementation; tests and alternative backends provide their
/// own.
#[async_trait]
pub trait MetadataSource: Send + Sync {
  /// Fetches the metadata describing the page at `url`.
  async fn fetch(&self, url: &str) -> Result<BibliographicRecord>;
}

/// Body of a metadata request.
#[derive(Debug, Serialize)]
struct MetadataRequest<'a> {
  /// Page to describe.
  url: &'a str,
}

/// HTTP client for the metadata-extraction service.
#[derive(Debug, Clone)]
pub struct Retriever {
  /// Endpoint the request is posted to.
  endpoint: Url,
  /// Extra headers sent with every request.
  headers:  BTreeMap<String, String>,
  /// Underlying HTTP client, carrying the configured timeout.
  client:   reqwest::Client,
}

impl Retriever {
  /// Creates a retriever for `endpoint` with the default timeout and no extra headers.
  pub fn new(endpoint: &str) -> Result<Self> {
    Self::from_config(&Config::default().with_endpoint(endpoint))
  }

  /// Creates a retriever from the endpoint, headers and timeout in `config`.
  pub fn from_config(config: &Config) -> Result<Self> {
    let endpoint = Url::parse(&config.endpoint).map_err(|e| {
      CiterError::Config(format!("Invalid endpoint {:?}: {}", config.endpoint, e))
    })?;
    let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
    Ok(Self { endpoint, headers: config.headers.clone(), client })
  }

  /// The endpoint requests are posted to.
  pub fn endpoint(&self) -> &Url { &self.endpoint }
}

#[async_trait]
impl MetadataSource for Retriever {
  async fn fetch(&self, url: &str) -> Result<BibliographicRecord> {
    validate_url(url)?;
    let url = url.trim();

    debug!("Fetching metadata for {} via: {}", url, self.endpoint);

    let mut request = self.client.post(self.endpoint.clone()).json(&MetadataRequest { url });
    for (key, value) in &self.headers {
      request = request.header(key, value);
    }

    let response = request.send().await?;
    let status = response.status();
    let data = response.bytes().await?;

    trace!("{} response ({}): {}", self.endpoint, status, String::from_utf8_lossy(&data));

    if !status.is_success() {
      return Err(CiterError::ApiError(format!(
        "{}: {}",
        status,
        String::from_utf8_lossy(&data).trim()
      )));
    }

    Ok(serde_json::from_slice(&data)?)
  }
}

/// Accepts only absolute `http` and `https` URLs, trimming surrounding whitespace.
pub fn validate_url(input: &str) -> Result<Url> {
  let input = input.trim();
  match Url::parse(input) {
    Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(url),
    _ => Err(CiterError::InvalidUrl(input.to_string())),
  }
}
