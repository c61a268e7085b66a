//! System clipboard as a shared buffer

use arboard::Clipboard;
use flip_core::{FlipError, Result, SharedBuffer};

/// The OS clipboard, read as text
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard =
            Clipboard::new().map_err(|e| FlipError::Buffer(format!("Failed to access clipboard: {}", e)))?;
        Ok(SystemClipboard { clipboard })
    }
}

impl SharedBuffer for SystemClipboard {
    fn read(&mut self) -> Result<String> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard or non-text content
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(FlipError::Buffer(format!("Failed to read clipboard: {}", e))),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.clipboard
            .clear()
            .map_err(|e| FlipError::Buffer(format!("Failed to clear clipboard: {}", e)))
    }
}
