//! Clipboard access for external links.
//!
//! The terminal never navigates away from the page. Activating an external
//! link copies its URL so it can be opened elsewhere.

use anyhow::Result;

/// Something that accepts copied text.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`.
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// Keeps copied text in memory. Used where no system clipboard exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    /// Everything copied so far, oldest first
    pub history: Vec<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Most recently copied text.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.history.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.last(), None);
        clipboard.copy_text("https://example.com").unwrap();
        clipboard.copy_text("mailto:a@b.c").unwrap();
        assert_eq!(clipboard.last(), Some("mailto:a@b.c"));
        assert_eq!(clipboard.history.len(), 2);
    }
}
