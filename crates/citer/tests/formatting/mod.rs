//! Formatting straight from extraction-service payloads.

use super::*;

#[test]
fn test_example_payload() {
  let record = record_from_json(
    r#"{
      "itemType": "webpage",
      "title": "Example Page",
      "websiteTitle": "Example Site",
      "date": "2021-01-05",
      "url": "https://example.com",
      "creators": [{ "creatorType": "author", "firstName": "Ann", "lastName": "Lee" }],
      "tags": [],
      "collections": [],
      "relations": {}
    }"#,
  );

  assert_eq!(format(&record), Citation {
    citation: r#"Lee, Ann. "Example Page." Example Site, 5 Jan. 2021, https://example.com."#
      .to_string(),
    title:    "Example Page".to_string(),
  });
}

#[test]
fn test_empty_payload() {
  let citation = format(&record_from_json("{}"));
  assert!(citation.is_empty());
  assert!(citation.title.is_empty());
}

#[test]
fn test_two_authors_and_contributor() {
  let record = record_from_json(
    r#"{
      "title": "Working Together",
      "creators": [
        { "creatorType": "author", "firstName": "Jane", "lastName": "Doe" },
        { "creatorType": "contributor", "firstName": "Pat", "lastName": "Helper" },
        { "creatorType": "author", "firstName": "John", "lastName": "Smith" }
      ],
      "date": "2023-09-15"
    }"#,
  );

  assert_eq!(
    format(&record).citation,
    r#"Doe, Jane and John Smith. "Working Together." 15 Sept. 2023,"#
  );
}

#[test]
fn test_anonymous_first_creator_drops_authors() {
  let record = record_from_json(
    r#"{
      "title": "Anonymous Post",
      "creators": [
        { "creatorType": "author", "firstName": "", "lastName": "Staff" },
        { "creatorType": "author", "firstName": "Jane", "lastName": "Doe" }
      ],
      "websiteTitle": "The Daily",
      "url": "https://daily.example"
    }"#,
  );

  assert_eq!(
    format(&record).citation,
    r#""Anonymous Post." The Daily, https://daily.example."#
  );
}

#[test]
fn test_many_authors_may() {
  let record = record_from_json(
    r#"{
      "creators": [
        { "creatorType": "author", "firstName": "A", "lastName": "One" },
        { "creatorType": "author", "firstName": "B", "lastName": "Two" },
        { "creatorType": "author", "firstName": "C", "lastName": "Three" }
      ],
      "date": "2000-05-09"
    }"#,
  );

  assert_eq!(format(&record).citation, "One, A, et al. 9 May 2000,");
}
