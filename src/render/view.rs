use super::clipboard::Clipboard;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Preview,
    Code,
}

/// Local view state of the result panel: which tab is shown and whether the
/// "copied" acknowledgment is still visible.
#[derive(Debug)]
pub struct ResultView {
    mode: ViewMode,
    copied_until: Option<Instant>,
    ack_duration: Duration,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl ResultView {
    pub fn new(ack_duration: Duration) -> Self {
        Self {
            mode: ViewMode::default(),
            copied_until: None,
            ack_duration,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        debug!("Result view switched to {:?}", mode);
        self.mode = mode;
    }

    /// Copies `output` verbatim. Nothing is copied when there is no output.
    pub fn copy(&mut self, output: &str, clipboard: &dyn Clipboard) -> Result<bool> {
        if output.is_empty() {
            return Ok(false);
        }

        clipboard.write_text(output)?;
        self.copied_until = Some(Instant::now() + self.ack_duration);
        Ok(true)
    }

    pub fn is_copied(&self) -> bool {
        self.copied_remaining().is_some()
    }

    /// Time left before the acknowledgment reverts.
    pub fn copied_remaining(&self) -> Option<Duration> {
        let deadline = self.copied_until?;
        let now = Instant::now();
        (now < deadline).then(|| deadline - now)
    }
}
