use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard access denied: {0}")]
    Denied(String),
}

#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
