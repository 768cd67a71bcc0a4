use serde::{Deserialize, Serialize};

/// Path of the summarization endpoint, relative to the backend base URL.
pub const SUMMARIZE_PATH: &str = "/api/summarize";
/// Path of the paraphrase endpoint, relative to the backend base URL.
pub const PARAPHRASE_PATH: &str = "/api/paraphrase";

/// Multipart field names understood by the summarize endpoint.
pub mod fields {
    pub const SENTENCES_COUNT: &str = "sentences_count";
    pub const TEXT: &str = "text";
    pub const FILE: &str = "file";
}

/// Successful summarize reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// JSON body posted to the paraphrase endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaphraseRequest {
    pub text: String,
}

impl ParaphraseRequest {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

/// Successful paraphrase reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaphraseResponse {
    pub paraphrased_text: String,
}

/// Error body returned with a non-2xx status.
/// The backend sends `{"error": ..}`; gateways in front of it may send `{"message": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorPayload {
    pub fn error<S: Into<String>>(text: S) -> Self {
        Self { error: Some(text.into()), message: None }
    }

    /// Human-readable text carried by the payload, `error` winning over `message`.
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_prefers_error_field() {
        let p: ErrorPayload = serde_json::from_str(r#"{"error":"bad","message":"worse"}"#).unwrap();
        assert_eq!(p.text(), Some("bad"));
    }

    #[test]
    fn error_payload_falls_back_to_message() {
        let p: ErrorPayload = serde_json::from_str(r#"{"message":"gateway timeout"}"#).unwrap();
        assert_eq!(p.text(), Some("gateway timeout"));
    }

    #[test]
    fn error_payload_without_text_is_empty() {
        let p: ErrorPayload = serde_json::from_str(r#"{"detail":{"x":1}}"#).unwrap();
        assert_eq!(p.text(), None);
        let blank = ErrorPayload::error("   ");
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn paraphrase_response_uses_snake_case_field() {
        let r: ParaphraseResponse = serde_json::from_str(r#"{"paraphrased_text":"Y"}"#).unwrap();
        assert_eq!(r.paraphrased_text, "Y");
    }
}
