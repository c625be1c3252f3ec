use crate::{Error, Result};
use std::sync::Mutex;
use tracing::error;

/// Write-only clipboard sink.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Server-side record of copies the browser confirmed. The page performs the
/// actual `navigator.clipboard` write inside the click handler and then
/// reports it, so this only keeps the last text acknowledged.
#[derive(Debug, Default)]
pub struct BrowserClipboard {
    last: Mutex<Option<String>>,
}

impl BrowserClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_copied(&self) -> Option<String> {
        match self.last.lock() {
            Ok(last) => last.clone(),
            Err(_) => {
                error!("Clipboard lock poisoned; no copied text available");
                None
            }
        }
    }
}

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut last = self.last.lock().map_err(|_| {
            error!("Clipboard lock poisoned; copy not recorded");
            Error::internal("clipboard lock poisoned")
        })?;
        *last = Some(text.to_string());
        Ok(())
    }
}
