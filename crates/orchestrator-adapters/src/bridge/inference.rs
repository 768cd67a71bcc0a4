use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use inference_client::{Client, ClientError, Document, BACKEND_URL_ENV};
use orchestrator_core::ports::{InferenceError, InferencePort};
use orchestrator_core::SummaryInput;

/// Inference port backed by the HTTP backend. Built without a client when no
/// backend is configured, in which case every call fails with `NotConfigured`.
pub struct HttpInference {
    client: Option<Client>,
}

impl HttpInference {
    pub fn new(client: Client) -> Self {
        Self { client: Some(client) }
    }

    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Read the backend URL from the environment. A missing URL is not an
    /// error here; an unparsable one is.
    pub fn from_env(timeout: Option<Duration>) -> Result<Self> {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                let client = Client::with_timeout(url.trim(), timeout)?;
                info!(backend = client.base_url(), "inference backend configured");
                Ok(Self::new(client))
            }
            _ => {
                warn!("{} not set; submissions will fail until it is configured", BACKEND_URL_ENV);
                Ok(Self::unconfigured())
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    fn client(&self) -> Result<&Client, InferenceError> {
        self.client.as_ref().ok_or(InferenceError::NotConfigured)
    }
}

#[async_trait]
impl InferencePort for HttpInference {
    async fn summarize(&self, input: SummaryInput, sentence_count: u8) -> Result<String, InferenceError> {
        let document = match input {
            SummaryInput::Text(text) => Document::Text(text),
            SummaryInput::File(file) => Document::File { file_name: file.name, bytes: file.bytes },
        };
        self.client()?
            .summarize(document, sentence_count)
            .await
            .map_err(map_client_error)
    }

    async fn paraphrase(&self, text: String) -> Result<String, InferenceError> {
        self.client()?.paraphrase(&text).await.map_err(map_client_error)
    }
}

pub fn map_client_error(e: ClientError) -> InferenceError {
    match e {
        ClientError::Network(detail) => InferenceError::Transport(detail),
        ClientError::Status { status, message } => InferenceError::Status { status, message },
        ClientError::Malformed(raw) => InferenceError::Malformed(raw),
    }
}
