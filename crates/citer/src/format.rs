//! Author-date citation formatting.
//!
//! [`format`] renders a [`BibliographicRecord`] as one line made of five optional segments, in
//! this order:
//!
//! | segment   | rendered as                  |
//! |-----------|------------------------------|
//! | author    | `Doe, Jane.`                 |
//! | title     | `"Example Page."`            |
//! | container | `Example Site,`              |
//! | date      | `5 Jan. 2021,`               |
//! | url       | `https://example.com.`       |
//!
//! Empty segments are dropped and the rest are joined by single spaces. The function is pure: the
//! same record always yields the same citation.
//!
//! # Examples
//!
//! ```
//! use citer::{
//!   format::format,
//!   record::{BibliographicRecord, Creator},
//! };
//!
//! let record = BibliographicRecord {
//!   title: "Example Page".into(),
//!   container_title: "Example Site".into(),
//!   date: "2021-01-05".into(),
//!   url: "https://example.com".into(),
//!   creators: vec![Creator::author("Ann", "Lee")],
//!   ..Default::default()
//! };
//!
//! let citation = format(&record);
//! assert_eq!(
//!   citation.citation,
//!   r#"Lee, Ann. "Example Page." Example Site, 5 Jan. 2021, https://example.com."#
//! );
//! assert_eq!(citation.title, "Example Page");
//! ```

use std::fmt::Display;

use super::*;

/// A formatted citation together with the title of the cited item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
  /// The full citation line.
  pub citation: String,
  /// Title of the cited item, copied from the input record.
  pub title:    String,
}

impl Citation {
  /// Whether nothing could be rendered from the input.
  pub fn is_empty(&self) -> bool { self.citation.is_empty() }
}

/// Calendar months with their citation abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
  /// `01`
  January,
  /// `02`
  February,
  /// `03`
  March,
  /// `04`
  April,
  /// `05`
  May,
  /// `06`
  June,
  /// `07`
  July,
  /// `08`
  August,
  /// `09`
  September,
  /// `10`
  October,
  /// `11`
  November,
  /// `12`
  December,
}

impl Month {
  /// Looks up a two-digit month code. Anything other than `01` through `12` is `None`.
  pub fn from_code(code: &str) -> Option<Self> {
    Some(match code {
      "01" => Self::January,
      "02" => Self::February,
      "03" => Self::March,
      "04" => Self::April,
      "05" => Self::May,
      "06" => Self::June,
      "07" => Self::July,
      "08" => Self::August,
      "09" => Self::September,
      "10" => Self::October,
      "11" => Self::November,
      "12" => Self::December,
      _ => return None,
    })
  }

  /// The abbreviation used in citations. `May` is written out and carries no period.
  pub fn abbreviation(&self) -> &'static str {
    match self {
      Self::January => "Jan.",
      Self::February => "Feb.",
      Self::March => "Mar.",
      Self::April => "Apr.",
      Self::May => "May",
      Self::June => "Jun.",
      Self::July => "Jul.",
      Self::August => "Aug.",
      Self::September => "Sept.",
      Self::October => "Oct.",
      Self::November => "Nov.",
      Self::December => "Dec.",
    }
  }
}

impl Display for Month {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.abbreviation())
  }
}

/// Formats a record into a citation.
///
/// Never fails. A record with nothing renderable produces an empty [`Citation::citation`], which
/// callers treat as a failure (see [`CiterError::EmptyCitation`]).
pub fn format(record: &BibliographicRecord) -> Citation {
  let mut segments: Vec<String> = Vec::with_capacity(5);

  // The guard looks at the first creator of the unfiltered list, before narrowing to authors.
  if record.creators.first().map_or(true, |creator| !creator.first_name.is_empty()) {
    segments.push(format_creators(&record.authors()));
  }

  if !record.title.is_empty() {
    segments.push(format!("\"{}.\"", record.title));
  }

  if !record.container_title.is_empty() {
    segments.push(format!("{},", record.container_title));
  }

  if !record.date.is_empty() {
    let date = format_date(&record.date);
    if !date.is_empty() {
      segments.push(format!("{date},"));
    }
  }

  if !record.url.is_empty() {
    segments.push(format!("{}.", record.url));
  }

  segments.retain(|segment| !segment.is_empty());

  Citation { citation: segments.join(" "), title: record.title.clone() }
}

/// Renders the author segment for an already filtered author list.
///
/// One author is inverted, two are joined with "and", three or more collapse to "et al.".
pub fn format_creators(authors: &[&Creator]) -> String {
  match authors {
    [] => String::new(),
    [only] => format!("{}, {}.", only.last_name, only.first_name),
    [first, second] => format!(
      "{}, {} and {} {}.",
      first.last_name, first.first_name, second.first_name, second.last_name
    ),
    [first, ..] => format!("{}, {}, et al.", first.last_name, first.first_name),
  }
}

/// Renders a `YYYY-MM-DD` date as `D Mon. YYYY`.
///
/// Anything not shaped like `YYYY-MM-DD` (a bare year, a timestamp, free text) is treated as absent
/// and renders as an empty string. Within a well-shaped date, zero parts and unknown month codes are
/// left out rather than rendered as placeholders, so `"2023-13-01"` becomes `"1 2023"`. The day
/// loses its leading zero.
pub fn format_date(date: &str) -> String {
  let Some((year, code, day)) = split_date(date) else {
    debug!("Date {:?} is not YYYY-MM-DD, treating as absent", date);
    return String::new();
  };

  let month = Month::from_code(code);
  if month.is_none() && code != "00" {
    warn!("Unrecognized month code {:?} in date {:?}, omitting month", code, date);
  }

  let day = (day != 0).then(|| day.to_string());
  let month = month.map(|m| m.abbreviation().to_string());
  let year = (year != "0000").then(|| year.to_string());
  [day, month, year].into_iter().flatten().collect::<Vec<_>>().join(" ")
}

/// Splits a `YYYY-MM-DD` string into year, month code and numeric day.
fn split_date(date: &str) -> Option<(&str, &str, u32)> {
  let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
  match *date.split('-').collect::<Vec<_>>().as_slice() {
    [year, month, day]
      if year.len() == 4
        && month.len() == 2
        && (1..=2).contains(&day.len())
        && all_digits(year)
        && all_digits(month)
        && all_digits(day) =>
      Some((year, month, day.parse().ok()?)),
    _ => None,
  }
}
