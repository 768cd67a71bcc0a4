use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::OrchestratorConfig;
use crate::session::{Feature, RequestId, RequestState, RequestTag, Session, SummarizerMode, SummaryLength, UploadedFile};
use crate::validator::{validate, ValidatedRequest, ValidationError};

pub const COPY_SUCCESS_MESSAGE: &str = "Text copied!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy text.";

/// Every way the session can change.
#[derive(Debug, Clone)]
pub enum Action {
    SelectFeature(Feature),
    SelectSummarizerMode(SummarizerMode),
    SetFile(Option<UploadedFile>),
    SetText(String),
    SetSummaryLength(SummaryLength),
    BeginSubmit,
    /// `outcome` is the result text or the user-facing failure message.
    Resolve { id: RequestId, outcome: Result<String, String> },
    CopyFinished { ok: bool },
    ClearCopyFeedback { generation: u64 },
}

/// Handed out when a submission starts.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub tag: RequestTag,
    pub request: ValidatedRequest,
    /// Cancelled when the session moves on; the resolution is then discarded.
    pub token: CancellationToken,
}

/// Result of dispatching an action.
#[derive(Debug, Clone)]
pub enum Transition {
    Applied,
    Submitted(Ticket),
    Rejected(ValidationError),
    Ignored(&'static str),
    Discarded(&'static str),
    FeedbackShown { generation: u64 },
}

struct InFlight {
    id: RequestId,
    token: CancellationToken,
}

/// Owns the session; the only place it is mutated.
pub struct Store {
    session: Session,
    config: OrchestratorConfig,
    next_id: u64,
    in_flight: Option<InFlight>,
    feedback_generation: u64,
}

pub type SharedStore = Arc<Mutex<Store>>;

/// The session is plain data, so a poisoned lock is still usable.
pub(crate) fn lock(store: &SharedStore) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Store {
    pub fn new(config: OrchestratorConfig) -> Self {
        Self {
            session: Session::new(config.default_summary_length),
            config,
            next_id: 0,
            in_flight: None,
            feedback_generation: 0,
        }
    }

    pub fn shared(config: OrchestratorConfig) -> SharedStore {
        Arc::new(Mutex::new(Self::new(config)))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dispatch(&mut self, action: Action) -> Transition {
        debug!(?action, state = %self.session.request, "dispatch");
        match action {
            Action::SelectFeature(feature) => self.select_feature(feature),
            Action::SelectSummarizerMode(mode) => self.select_summarizer_mode(mode),
            Action::SetFile(file) => self.set_file(file),
            Action::SetText(text) => self.set_text(text),
            Action::SetSummaryLength(length) => {
                self.session.summary_length = length;
                Transition::Applied
            }
            Action::BeginSubmit => self.begin_submit(),
            Action::Resolve { id, outcome } => self.resolve(id, outcome),
            Action::CopyFinished { ok } => self.copy_finished(ok),
            Action::ClearCopyFeedback { generation } => self.clear_copy_feedback(generation),
        }
    }

    fn select_feature(&mut self, feature: Feature) -> Transition {
        // The network call keeps running; its resolution will be discarded.
        if let Some(flight) = self.in_flight.take() {
            debug!(id = %flight.id, "invalidating in-flight request on feature switch");
            flight.token.cancel();
        }
        self.session.reset_for_feature(feature);
        Transition::Applied
    }

    fn select_summarizer_mode(&mut self, mode: SummarizerMode) -> Transition {
        if self.session.active_feature != Feature::Summarizer {
            return Transition::Ignored("summarizer mode only applies to the summarizer");
        }
        if mode != self.session.summarizer_mode {
            // Switching back later must not revive the request issued for the old inputs.
            if let Some(flight) = &self.in_flight {
                debug!(id = %flight.id, "invalidating in-flight request on mode switch");
                flight.token.cancel();
            }
        }
        self.session.summarizer_mode = mode;
        self.session.file = None;
        Transition::Applied
    }

    fn set_file(&mut self, file: Option<UploadedFile>) -> Transition {
        if self.session.mode_tag() != Some(SummarizerMode::File) {
            return Transition::Ignored("file input is not active");
        }
        self.session.file = file;
        Transition::Applied
    }

    fn set_text(&mut self, text: String) -> Transition {
        let max = self.config.paraphrase_max_chars;
        self.session.original_text = match self.session.active_feature {
            Feature::Paraphraser if text.chars().count() > max => text.chars().take(max).collect(),
            _ => text,
        };
        Transition::Applied
    }

    fn begin_submit(&mut self) -> Transition {
        if self.session.is_submitting() {
            return Transition::Ignored("a request is already in flight");
        }
        self.session.copy_feedback = None;

        let request = match validate(&self.session) {
            Ok(r) => r,
            Err(e) => {
                self.session.request = RequestState::Failed(e.to_string());
                return Transition::Rejected(e);
            }
        };

        self.next_id += 1;
        let tag = RequestTag {
            id: RequestId(self.next_id),
            feature: self.session.active_feature,
            mode: self.session.mode_tag(),
        };
        let token = CancellationToken::new();
        self.in_flight = Some(InFlight { id: tag.id, token: token.clone() });
        self.session.request = RequestState::Submitting(tag);

        Transition::Submitted(Ticket { tag, request, token })
    }

    fn resolve(&mut self, id: RequestId, outcome: Result<String, String>) -> Transition {
        let tag = match self.session.request.in_flight() {
            Some(tag) if tag.id == id => *tag,
            _ => {
                warn!(%id, "discarding stale resolution");
                return Transition::Discarded("request is no longer in flight");
            }
        };
        let cancelled = self.in_flight.take().map_or(true, |f| f.id != id || f.token.is_cancelled());

        if cancelled || tag.feature != self.session.active_feature || tag.mode != self.session.mode_tag() {
            warn!(%id, feature = %tag.feature, "discarding resolution for a session that moved on");
            self.session.request = RequestState::Idle;
            return Transition::Discarded("session changed while the request was in flight");
        }

        match outcome {
            Ok(text) => self.session.store_result(tag.feature, text),
            // Earlier results stay; the error view takes precedence anyway.
            Err(reason) => self.session.request = RequestState::Failed(reason),
        }
        Transition::Applied
    }

    fn copy_finished(&mut self, ok: bool) -> Transition {
        self.feedback_generation += 1;
        let message = if ok { COPY_SUCCESS_MESSAGE } else { COPY_FAILURE_MESSAGE };
        self.session.copy_feedback = Some(message.to_string());
        Transition::FeedbackShown { generation: self.feedback_generation }
    }

    fn clear_copy_feedback(&mut self, generation: u64) -> Transition {
        if generation != self.feedback_generation {
            return Transition::Ignored("copy feedback was superseded");
        }
        self.session.copy_feedback = None;
        Transition::Applied
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(OrchestratorConfig::default())
    }
}
