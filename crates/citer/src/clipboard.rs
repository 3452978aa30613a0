//! Clipboard capability.
//!
//! The generate flow hands the finished citation to a [`ClipboardSink`] rather than to the system
//! clipboard directly, so headless runs and tests can swap in [`NoClipboard`].
//!
//! On X11 and Wayland the clipboard is owned by a live process: contents set through
//! [`SystemClipboard`] vanish when the handle is dropped unless a clipboard manager takes them over.
//! Short-lived programs should copy through a [`DetachedClipboard`], which hands the text to a
//! background process that calls [`SystemClipboard::hold`].

use std::{
  io::Write,
  process::{Command, Stdio},
};

use super::*;

/// Destination for a finished citation.
pub trait ClipboardSink {
  /// Places `text` on the clipboard.
  fn copy(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, accessed through `arboard`.
pub struct SystemClipboard {
  /// Open handle to the platform clipboard.
  inner: arboard::Clipboard,
}

impl SystemClipboard {
  /// Opens the system clipboard.
  ///
  /// Fails when no clipboard is available, e.g. on a headless Linux machine without X11 or
  /// Wayland.
  pub fn new() -> Result<Self> { Ok(Self { inner: arboard::Clipboard::new()? }) }

  /// Sets `text` and keeps serving it until another application takes the clipboard over.
  ///
  /// On Linux this blocks; elsewhere the contents outlive the handle and it returns immediately.
  pub fn hold(mut self, text: &str) -> Result<()> {
    #[cfg(target_os = "linux")]
    {
      use arboard::SetExtLinux;
      debug!("Holding {} bytes on the clipboard until replaced", text.len());
      self.inner.set().wait().text(text)?;
    }
    #[cfg(not(target_os = "linux"))]
    self.inner.set_text(text)?;
    Ok(())
  }
}

impl ClipboardSink for SystemClipboard {
  fn copy(&mut self, text: &str) -> Result<()> {
    self.inner.set_text(text)?;
    debug!("Copied {} bytes to the system clipboard", text.len());
    Ok(())
  }
}

/// A clipboard served by a background process so the copy survives the caller exiting.
///
/// The text is written to the holder's stdin; the holder is expected to read it all and pass it to
/// [`SystemClipboard::hold`].
#[derive(Debug, Clone)]
pub struct DetachedClipboard {
  /// Program that holds the clipboard.
  program: PathBuf,
  /// Arguments passed to the holder.
  args:    Vec<String>,
}

impl DetachedClipboard {
  /// Creates a sink that spawns `program` with `args` for every copy.
  pub fn new(
    program: impl Into<PathBuf>,
    args: impl IntoIterator<Item = impl Into<String>>,
  ) -> Self {
    Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
  }
}

impl ClipboardSink for DetachedClipboard {
  // The holder outlives this process; it is never waited on.
  #[allow(clippy::zombie_processes)]
  fn copy(&mut self, text: &str) -> Result<()> {
    let mut child = Command::new(&self.program)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
      stdin.write_all(text.as_bytes())?;
    }
    debug!("Handed {} bytes to clipboard holder {}", text.len(), child.id());
    Ok(())
  }
}

/// A clipboard that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
  fn copy(&mut self, _text: &str) -> Result<()> {
    trace!("Clipboard disabled, not copying");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[cfg(unix)]
  #[test]
  fn test_detached_clipboard_feeds_holder_stdin() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("held.txt");
    let done = dir.path().join("done");
    let script = format!("cat > '{}' && touch '{}'", out.display(), done.display());

    let mut sink = DetachedClipboard::new("sh", ["-c", script.as_str()]);
    sink.copy("Doe, Jane. \"Page.\"").unwrap();

    for _ in 0..100 {
      if done.exists() {
        break;
      }
      std::thread::sleep(Duration::from_millis(50));
    }
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "Doe, Jane. \"Page.\"");
  }

  #[test]
  fn test_detached_clipboard_missing_holder_errors() {
    let mut sink = DetachedClipboard::new("/nonexistent/citer-holder", Vec::<String>::new());
    assert!(matches!(sink.copy("text"), Err(CiterError::Path(_))));
  }

  #[test]
  fn test_no_clipboard_accepts_anything() { assert!(NoClipboard.copy("anything").is_ok()); }
}
