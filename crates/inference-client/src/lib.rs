use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{multipart, Client as Http, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use protocol::{ErrorPayload, ParaphraseRequest, ParaphraseResponse, SummarizeResponse};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "DOCASSIST_BACKEND_URL";

/// Failure talking to the inference backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status. `message` is set when the body was a recognisable error payload.
    #[error("backend returned {status}")]
    Status { status: u16, message: Option<String> },
    /// JSON body of an unexpected shape, stringified.
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl ClientError {
    fn network(e: reqwest::Error) -> Self {
        ClientError::Network(e.to_string())
    }
}

/// What gets summarized: pasted text or an uploaded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Text(String),
    File { file_name: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug)]
pub struct Client {
    http: Http,
    base_url: String,
}

impl Client {
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Build a client whose requests give up after `timeout`. `None` waits indefinitely.
    pub fn with_timeout<S: Into<String>>(base_url: S, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url).with_context(|| format!("invalid backend url: {}", base_url))?;

        let mut builder = Http::builder().pool_max_idle_per_host(4);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn summarize(&self, document: Document, sentences: u8) -> Result<String, ClientError> {
        let mut form = multipart::Form::new().text(protocol::fields::SENTENCES_COUNT, sentences.to_string());
        form = match document {
            Document::Text(text) => form.text(protocol::fields::TEXT, text),
            Document::File { file_name, bytes } => {
                form.part(protocol::fields::FILE, multipart::Part::bytes(bytes).file_name(file_name))
            }
        };

        let url = self.endpoint(protocol::SUMMARIZE_PATH);
        debug!(%url, sentences, "posting summarize request");
        let resp = self.http.post(url).multipart(form).send().await.map_err(ClientError::network)?;

        let out: SummarizeResponse = read_result(resp).await?;
        Ok(out.summary)
    }

    pub async fn paraphrase(&self, text: &str) -> Result<String, ClientError> {
        let url = self.endpoint(protocol::PARAPHRASE_PATH);
        debug!(%url, chars = text.chars().count(), "posting paraphrase request");
        let resp = self.http.post(url)
            .json(&ParaphraseRequest::new(text))
            .send().await
            .map_err(ClientError::network)?;

        let out: ParaphraseResponse = read_result(resp).await?;
        Ok(out.paraphrased_text)
    }
}

async fn read_result<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.text().await.map_err(ClientError::network)?;

    if !status.is_success() {
        return Err(classify_failure(status, &body));
    }
    decode_success(&body)
}

fn classify_failure(status: StatusCode, body: &str) -> ClientError {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return ClientError::Status { status: status.as_u16(), message: None },
    };
    let message = serde_json::from_value::<ErrorPayload>(value.clone())
        .ok()
        .and_then(|p| p.text().map(str::to_string));

    match message {
        Some(message) => ClientError::Status { status: status.as_u16(), message: Some(message) },
        None => ClientError::Malformed(value.to_string()),
    }
}

fn decode_success<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => serde_json::from_value(value.clone()).map_err(|_| ClientError::Malformed(value.to_string())),
        Err(_) => Err(ClientError::Malformed(body.to_string())),
    }
}
