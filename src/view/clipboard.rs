// src/view/clipboard.rs
// Copies the rendered tree to the system clipboard.
//
// Needs the `system-clipboard` feature; without it copying reports an error
// instead of silently doing nothing.

use anyhow::Result;

#[cfg(feature = "system-clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| anyhow::anyhow!("Clipboard unavailable: {}", e))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {}", e))?;
    tracing::debug!(bytes = text.len(), "copied tree to clipboard");
    Ok(())
}

#[cfg(not(feature = "system-clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> Result<()> {
    Err(anyhow::anyhow!(
        "Clipboard support is not compiled in (rebuild with --features system-clipboard)"
    ))
}

/// Copying is offered only for the full tree, not for search results.
pub fn can_copy(query: Option<&str>) -> bool {
    query.map_or(true, |q| q.trim().is_empty())
}
