use std::sync::Arc;

/// Clipboard errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard rejected the text: {0}")]
    Rejected(String),

    #[error("Clipboard task failed: {0}")]
    TaskFailed(String),
}

/// Write-only access to a clipboard
#[async_trait::async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// The system clipboard, accessed through `arboard` on tokio's blocking pool
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

fn write_blocking(text: String) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Rejected(e.to_string()))
}

#[async_trait::async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || write_blocking(text))
            .await
            .map_err(|e| ClipboardError::TaskFailed(e.to_string()))?
    }
}

/// In-memory clipboard, optionally refusing every write
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: std::sync::Mutex<Vec<String>>,
    refuse: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            contents: std::sync::Mutex::new(Vec::new()),
            refuse: true,
        }
    }

    /// Every text written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.contents
            .lock()
            .map(|contents| contents.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError::Rejected("write refused".to_string()));
        }

        self.contents
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
            .push(text);
        Ok(())
    }
}

/// Copy `text` and log the outcome. Used as the body of the copy task.
pub async fn copy_text(
    clipboard: Arc<dyn ClipboardWriter>,
    text: String,
) -> Result<(), ClipboardError> {
    let len = text.len();
    let result = clipboard.write_text(text).await;

    match &result {
        Ok(()) => log::info!("Copied {} bytes to clipboard", len),
        Err(e) => log::error!("Failed to copy: {}", e),
    }

    result
}
