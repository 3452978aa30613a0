use super::*;

pub mod cite;
pub mod clean;
pub mod get;
pub mod hold;
pub mod init;
pub mod list;
pub mod remove;

pub use cite::{cite, CiteArgs};
pub use clean::clean;
pub use get::get;
pub use hold::{citation_clipboard, hold_clipboard, HOLD_CLIPBOARD_COMMAND};
pub use init::{init, InitArgs};
pub use list::list;
pub use remove::remove;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a configuration file and create the citation database
  Init(InitArgs),

  /// Generate a citation for a URL, store it and copy it to the clipboard
  Cite(CiteArgs),

  /// List stored citations, newest first
  List,

  /// Show a stored citation
  Get {
    /// Six-letter citation id, e.g. "QWERTY"
    id: String,
  },

  /// Remove a stored citation
  Remove {
    /// Six-letter citation id, e.g. "QWERTY"
    id: String,
  },

  /// Removes the entire citation database after confirmation
  Clean,

  /// Serve text from stdin on the clipboard until it is replaced (spawned by `cite`)
  #[command(name = HOLD_CLIPBOARD_COMMAND, hide = true)]
  HoldClipboard,
}
