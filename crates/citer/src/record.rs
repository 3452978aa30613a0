//! Bibliographic metadata as delivered by the metadata-extraction service.
//!
//! The extraction service answers with a Zotero-style item. Only a handful of its fields feed the
//! formatter; the rest are accepted so that a full payload deserializes without loss.
//!
//! Every field is optional on the wire. Missing keys and explicit `null`s both land as the empty
//! value of the field's type.
//!
//! # Examples
//!
//! ```
//! use citer::record::BibliographicRecord;
//!
//! let record: BibliographicRecord = serde_json::from_str(
//!   r#"{
//!     "itemType": "webpage",
//!     "title": "Example Page",
//!     "websiteTitle": "Example Site",
//!     "creators": [{ "creatorType": "author", "firstName": "Ann", "lastName": "Lee" }],
//!     "date": "2021-01-05",
//!     "url": "https://example.com",
//!     "abstractNote": null
//!   }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(record.container_title, "Example Site");
//! assert_eq!(record.creators[0].last_name, "Lee");
//! assert!(record.abstract_note.is_empty());
//! ```

use serde_json::Value;

use super::*;

/// A contributor to a cited work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
  /// Role of the contributor, e.g. `"author"` or `"editor"`.
  #[serde(default, deserialize_with = "null_as_default")]
  pub creator_type: String,
  /// Given name.
  #[serde(default, deserialize_with = "null_as_default")]
  pub first_name:   String,
  /// Family name.
  #[serde(default, deserialize_with = "null_as_default")]
  pub last_name:    String,
}

impl Creator {
  /// Creates a contributor with the `"author"` role.
  pub fn author(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
    Self {
      creator_type: "author".to_string(),
      first_name:   first_name.into(),
      last_name:    last_name.into(),
    }
  }

  /// Whether this contributor has the `"author"` role.
  pub fn is_author(&self) -> bool { self.creator_type == "author" }
}

/// Metadata describing a single cited item.
///
/// Field names follow the extraction service's camelCase payload. The service calls the hosting
/// work `websiteTitle`; `containerTitle` is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibliographicRecord {
  /// Zotero item type, e.g. `"webpage"`. Informational only.
  #[serde(default, deserialize_with = "null_as_default")]
  pub item_type:       String,
  /// Title of the cited item.
  #[serde(default, deserialize_with = "null_as_default")]
  pub title:           String,
  /// Contributors in citation order.
  #[serde(default, deserialize_with = "null_as_default")]
  pub creators:        Vec<Creator>,
  /// Title of the larger work or site hosting the item.
  #[serde(
    default,
    rename = "websiteTitle",
    alias = "containerTitle",
    deserialize_with = "null_as_default"
  )]
  pub container_title: String,
  /// Publication date, `YYYY-MM-DD` when present.
  #[serde(default, deserialize_with = "null_as_default")]
  pub date:            String,
  /// Location of the cited item.
  #[serde(default, deserialize_with = "null_as_default")]
  pub url:             String,

  /// Abstract or summary.
  #[serde(default, deserialize_with = "null_as_default")]
  pub abstract_note: String,
  /// Shortened title.
  #[serde(default, deserialize_with = "null_as_default")]
  pub short_title:   String,
  /// When the service accessed the page.
  #[serde(default, deserialize_with = "null_as_default")]
  pub access_date:   String,
  /// Content language.
  #[serde(default, deserialize_with = "null_as_default")]
  pub language:      String,
  /// Rights statement.
  #[serde(default, deserialize_with = "null_as_default")]
  pub rights:        String,
  /// Free-form extra data.
  #[serde(default, deserialize_with = "null_as_default")]
  pub extra:         String,
  /// Tags attached by the service.
  #[serde(default, deserialize_with = "null_as_default")]
  pub tags:          Vec<Value>,
  /// Collections the item belongs to.
  #[serde(default, deserialize_with = "null_as_default")]
  pub collections:   Vec<Value>,
  /// Relations to other items.
  #[serde(default)]
  pub relations:     Value,
}

impl BibliographicRecord {
  /// Only the creators with the `"author"` role, in their original order.
  pub fn authors(&self) -> Vec<&Creator> { self.creators.iter().filter(|c| c.is_author()).collect() }
}

/// Deserializes `null` as the type's default value instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>, {
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
