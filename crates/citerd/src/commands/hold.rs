//! Module for the hidden clipboard holder spawned by the "cite" command.
//!
//! On X11 and Wayland a copy only lives as long as the process that made it. `cite` exits right
//! after copying, so it hands the citation to a detached `citer hold-clipboard` process that keeps
//! serving it until another application takes the clipboard over.

use std::io::Read;

use super::*;

/// Name of the hidden holder subcommand.
pub const HOLD_CLIPBOARD_COMMAND: &str = "hold-clipboard";

/// Reads the text to hold from stdin and serves it on the system clipboard.
pub fn hold_clipboard() -> Result<()> {
  let mut text = String::new();
  std::io::stdin().read_to_string(&mut text)?;
  trace!("Holding {} bytes for the clipboard", text.len());
  SystemClipboard::new()?.hold(&text)?;
  Ok(())
}

/// The clipboard `cite` should copy through.
///
/// On Linux the copy goes to a detached holder running this same binary; elsewhere the system
/// clipboard keeps its contents after the handle is dropped and is used directly.
pub fn citation_clipboard() -> citer::error::Result<Box<dyn ClipboardSink>> {
  // Fails early on machines without a clipboard.
  let system = SystemClipboard::new()?;
  if cfg!(target_os = "linux") {
    drop(system);
    let program = std::env::current_exe()?;
    return Ok(Box::new(DetachedClipboard::new(program, [HOLD_CLIPBOARD_COMMAND])));
  }
  Ok(Box::new(system))
}
