//! Clipboard helper for copying comments and log lines
//!
//! Uses `arboard` for cross-platform support. The clipboard is created fresh
//! each time so no handle is held while the TUI runs.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    tracing::debug!(bytes = text.len(), "Copied to clipboard");
    Ok(())
}
