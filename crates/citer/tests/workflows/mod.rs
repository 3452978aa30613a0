//! Full generate workflows against a mocked extraction service.

use super::*;

#[derive(Default)]
struct RecordingClipboard(Vec<String>);

impl ClipboardSink for RecordingClipboard {
  fn copy(&mut self, text: &str) -> Result<(), CiterError> {
    self.0.push(text.to_string());
    Ok(())
  }
}

const EXAMPLE_BODY: &str = r#"{
  "itemType": "webpage",
  "title": "Example Page",
  "websiteTitle": "Example Site",
  "creators": [{ "creatorType": "author", "firstName": "Ann", "lastName": "Lee" }],
  "date": "2021-01-05",
  "url": "https://example.com"
}"#;

#[traced_test]
#[tokio::test]
async fn test_cite_list_get_remove() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("POST", "/api/website")
    .match_body(Matcher::PartialJsonString(r#"{ "url": "https://example.com" }"#.to_string()))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(EXAMPLE_BODY)
    .expect(1)
    .create_async()
    .await;

  let (mut citer, _dir) = create_test_citer(&server).await;
  let mut clipboard = RecordingClipboard::default();

  let stored: StoredCitation = citer.cite("https://example.com", &mut clipboard).await?;
  mock.assert_async().await;

  assert_eq!(
    stored.citation,
    r#"Lee, Ann. "Example Page." Example Site, 5 Jan. 2021, https://example.com."#
  );
  assert_eq!(clipboard.0, vec![stored.citation.clone()]);

  let listed = citer.list().await?;
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, stored.id);

  let fetched = citer.get(&stored.id).await?.expect("citation should be stored");
  assert_eq!(fetched.title, "Example Page");

  citer.remove(&stored.id).await?;
  assert!(citer.list().await?.is_empty());
  assert!(matches!(citer.remove(&stored.id).await, Err(CiterError::NotFound(_))));
  Ok(())
}

#[tokio::test]
async fn test_copy_disabled_leaves_clipboard_alone() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("POST", "/api/website")
    .with_status(200)
    .with_body(EXAMPLE_BODY)
    .create_async()
    .await;

  let (mut citer, _dir) = create_test_citer(&server).await;
  citer.config.copy_to_clipboard = false;
  let mut clipboard = RecordingClipboard::default();

  let stored = citer.cite("https://example.com", &mut clipboard).await?;
  assert!(!stored.citation.is_empty());
  assert!(clipboard.0.is_empty());
  assert_eq!(citer.list().await?.len(), 1);
  Ok(())
}

#[tokio::test]
async fn test_empty_metadata_is_an_error() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("POST", "/api/website")
    .with_status(200)
    .with_body(r#"{ "itemType": "webpage", "creators": [] }"#)
    .create_async()
    .await;

  let (mut citer, _dir) = create_test_citer(&server).await;
  let mut clipboard = RecordingClipboard::default();

  let result = citer.cite("https://example.com", &mut clipboard).await;
  assert!(matches!(result, Err(CiterError::EmptyCitation)));
  assert!(citer.list().await?.is_empty());
  assert!(clipboard.0.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_service_failure_stores_nothing() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("POST", "/api/website")
    .with_status(502)
    .with_body("bad gateway")
    .create_async()
    .await;

  let (mut citer, _dir) = create_test_citer(&server).await;

  let result = citer.cite("https://example.com", &mut NoClipboard).await;
  assert!(matches!(result, Err(CiterError::ApiError(_))));
  assert!(citer.list().await?.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_from_path() -> TestResult<()> {
  let dir = tempdir()?;
  let config_path = dir.path().join("config.toml");
  Config::default().with_database_path(&dir.path().join("citer.db")).save(&config_path)?;

  let citer = Citer::from_path(&config_path).await?;
  assert!(citer.list().await?.is_empty());
  assert!(dir.path().join("citer.db").exists());
  Ok(())
}
