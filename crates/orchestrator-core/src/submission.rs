use std::sync::Arc;

use tracing::{info, warn};

use crate::ports::{InferenceError, InferencePort};
use crate::session::{Feature, RequestTag};
use crate::state::{lock, Action, SharedStore, Ticket, Transition};
use crate::validator::{ValidatedRequest, ValidationError};

pub const BACKEND_NOT_CONFIGURED: &str = "Backend is not configured.";
pub const CORRUPT_FILE_MESSAGE: &str =
    "There was a problem with the file format. Make sure the file is not corrupted.";

/// How a call to [`SubmissionController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the collaborator was not called.
    Rejected(ValidationError),
    /// Another submission is still in flight.
    AlreadyInFlight,
    Succeeded,
    Failed(String),
    /// The session moved on before the reply arrived.
    Discarded,
}

/// Drives one request from validation to resolution.
pub struct SubmissionController<I: InferencePort> {
    store: SharedStore,
    inference: Arc<I>,
}

impl<I: InferencePort> SubmissionController<I> {
    pub fn new(store: SharedStore, inference: Arc<I>) -> Self {
        Self { store, inference }
    }

    /// Validate and enter `Submitting` without awaiting anything. The caller
    /// drives the returned request to resolution, possibly on another task.
    pub fn begin(&self) -> Result<PendingSubmission<I>, SubmitOutcome> {
        let transition = lock(&self.store).dispatch(Action::BeginSubmit);
        match transition {
            Transition::Submitted(ticket) => Ok(PendingSubmission {
                store: self.store.clone(),
                inference: self.inference.clone(),
                ticket,
            }),
            Transition::Rejected(e) => {
                info!(error = %e, "submission rejected by validation");
                Err(SubmitOutcome::Rejected(e))
            }
            _ => Err(SubmitOutcome::AlreadyInFlight),
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin() {
            Ok(pending) => pending.finish().await,
            Err(outcome) => outcome,
        }
    }
}

/// A request that has entered `Submitting` and awaits its reply.
pub struct PendingSubmission<I: InferencePort> {
    store: SharedStore,
    inference: Arc<I>,
    ticket: Ticket,
}

impl<I: InferencePort> PendingSubmission<I> {
    pub fn tag(&self) -> RequestTag {
        self.ticket.tag
    }

    pub async fn finish(self) -> SubmitOutcome {
        let Ticket { tag, request, token } = self.ticket;

        info!(id = %tag.id, feature = %tag.feature, "submitting request");
        let outcome = call(self.inference.as_ref(), request).await.map_err(|e| {
            warn!(id = %tag.id, error = %e, "inference failed");
            describe_failure(tag.feature, &e)
        });
        if token.is_cancelled() {
            info!(id = %tag.id, "request was invalidated while in flight");
        }

        let applied = lock(&self.store).dispatch(Action::Resolve { id: tag.id, outcome: outcome.clone() });
        match (applied, outcome) {
            (Transition::Applied, Ok(_)) => SubmitOutcome::Succeeded,
            (Transition::Applied, Err(reason)) => SubmitOutcome::Failed(reason),
            _ => SubmitOutcome::Discarded,
        }
    }
}

async fn call<I: InferencePort>(inference: &I, request: ValidatedRequest) -> Result<String, InferenceError> {
    match request {
        ValidatedRequest::Summarize { input, sentence_count } => inference.summarize(input, sentence_count).await,
        ValidatedRequest::Paraphrase { text } => inference.paraphrase(text).await,
    }
}

/// Turn a collaborator failure into the single string shown to the user.
pub fn describe_failure(feature: Feature, err: &InferenceError) -> String {
    let fallback = match feature {
        Feature::Summarizer => "Failed to summarize",
        Feature::Paraphraser => "Failed to paraphrase",
    };
    let message = match err {
        InferenceError::NotConfigured => return BACKEND_NOT_CONFIGURED.to_string(),
        InferenceError::Transport(detail) => format!("{}: {}", fallback, detail),
        InferenceError::Status { message: Some(m), .. } if !m.trim().is_empty() => m.clone(),
        InferenceError::Status { .. } => fallback.to_string(),
        InferenceError::Malformed(raw) if !raw.trim().is_empty() => raw.clone(),
        InferenceError::Malformed(_) => fallback.to_string(),
    };
    // Raw object dumps from the upload path mean the file could not be read.
    if message.contains("Object") {
        CORRUPT_FILE_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let e = InferenceError::Status { status: 500, message: Some("Gagal membaca file".into()) };
        assert_eq!(describe_failure(Feature::Summarizer, &e), "Gagal membaca file");
    }

    #[test]
    fn missing_message_uses_feature_fallback() {
        let e = InferenceError::Status { status: 502, message: None };
        assert_eq!(describe_failure(Feature::Summarizer, &e), "Failed to summarize");
        assert_eq!(describe_failure(Feature::Paraphraser, &e), "Failed to paraphrase");
    }

    #[test]
    fn transport_error_keeps_detail() {
        let e = InferenceError::Transport("connection refused".into());
        assert_eq!(describe_failure(Feature::Paraphraser, &e), "Failed to paraphrase: connection refused");
    }

    #[test]
    fn missing_backend_has_fixed_message() {
        assert_eq!(describe_failure(Feature::Summarizer, &InferenceError::NotConfigured), BACKEND_NOT_CONFIGURED);
    }

    #[test]
    fn object_dump_becomes_corrupt_file_message() {
        let e = InferenceError::Malformed("[object Object]".into());
        assert_eq!(describe_failure(Feature::Summarizer, &e), CORRUPT_FILE_MESSAGE);

        let e = InferenceError::Status { status: 500, message: Some("Object of type bytes is not JSON serializable".into()) };
        assert_eq!(describe_failure(Feature::Summarizer, &e), CORRUPT_FILE_MESSAGE);
    }

    #[test]
    fn other_malformed_payload_is_passed_through() {
        let e = InferenceError::Malformed(r#"{"detail":"nope"}"#.into());
        assert_eq!(describe_failure(Feature::Paraphraser, &e), r#"{"detail":"nope"}"#);
    }
}
