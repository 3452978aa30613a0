//! The end-to-end generate flow: fetch, format, store, copy.

use super::*;

/// How many fresh ids are tried before giving up on storing a citation.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Generates a citation for `url` and records it.
///
/// 1. fetches the page's metadata from `source`
/// 2. formats it with [`format::format`]
/// 3. stores the result in `store` under a fresh id from [`database::generate_id`]
/// 4. copies the citation to `clipboard`
///
/// Fails with [`CiterError::EmptyCitation`] when the metadata has nothing to cite; in that case
/// nothing is stored or copied.
pub async fn generate<S, D, C>(
  source: &S,
  store: &mut D,
  clipboard: &mut C,
  url: &str,
) -> Result<StoredCitation>
where
  S: MetadataSource + ?Sized,
  D: CitationStore + ?Sized,
  C: ClipboardSink + ?Sized,
{
  let record = source.fetch(url).await?;
  let citation = format::format(&record);

  if citation.is_empty() {
    warn!("Metadata for {} produced an empty citation", url);
    return Err(CiterError::EmptyCitation);
  }
  debug!("Formatted citation: {}", citation.citation);

  let stored = store_citation(store, citation).await?;
  clipboard.copy(&stored.citation)?;
  Ok(stored)
}

/// Stores `citation` under the first free generated id.
async fn store_citation<D: CitationStore + ?Sized>(
  store: &mut D,
  citation: Citation,
) -> Result<StoredCitation> {
  for _ in 0..MAX_ID_ATTEMPTS {
    let stored = StoredCitation::new(database::generate_id(), citation.clone());
    if store.insert(&stored).await? {
      debug!("Stored citation under id {}", stored.id);
      return Ok(stored);
    }
    trace!("Citation id {} already taken, retrying", stored.id);
  }
  Err(CiterError::IdsExhausted(MAX_ID_ATTEMPTS))
}
