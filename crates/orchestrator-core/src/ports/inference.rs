use async_trait::async_trait;

use crate::validator::SummaryInput;

/// Failure reported by the inference collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// No backend target was configured for this host.
    #[error("backend not configured")]
    NotConfigured,
    /// Network unreachable or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-success status, with the server's message when it sent one.
    #[error("backend returned status {status}")]
    Status { status: u16, message: Option<String> },
    /// Response was not of the expected shape; carries whatever was received.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait InferencePort: Send + Sync {
    async fn summarize(&self, input: SummaryInput, sentence_count: u8) -> Result<String, InferenceError>;

    async fn paraphrase(&self, text: String) -> Result<String, InferenceError>;
}
