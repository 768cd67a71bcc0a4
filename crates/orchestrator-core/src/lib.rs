pub mod clipboard;
pub mod config;
pub mod ports;
pub mod presenter;
pub mod session;
pub mod state;
pub mod submission;
pub mod validator;

use std::sync::Arc;

use clipboard::{ClipboardService, CopyOutcome};
use config::OrchestratorConfig;
use ports::{ClipboardPort, InferencePort};
use presenter::present;
use session::{Feature, Session, SummarizerMode, SummaryLength, UploadedFile};
use state::{lock, Action, SharedStore, Store, Transition};
use submission::{PendingSubmission, SubmissionController, SubmitOutcome};

pub use presenter::View;
pub use validator::{SummaryInput, ValidatedRequest, ValidationError};

/// Headless form orchestrator: feature selection, input capture, submission
/// and clipboard feedback over a single session.
pub struct RequestOrchestrator<I: InferencePort, C: ClipboardPort> {
    store: SharedStore,
    submissions: SubmissionController<I>,
    clipboard: ClipboardService<C>,
}

impl<I: InferencePort, C: ClipboardPort> RequestOrchestrator<I, C> {
    pub fn new(inference: I, clipboard: C, config: OrchestratorConfig) -> Self {
        let ttl = config.copy_feedback_ttl;
        let store = Store::shared(config);
        Self {
            submissions: SubmissionController::new(store.clone(), Arc::new(inference)),
            clipboard: ClipboardService::new(store.clone(), Arc::new(clipboard), ttl),
            store,
        }
    }

    fn dispatch(&self, action: Action) -> Transition {
        lock(&self.store).dispatch(action)
    }

    /// Switch feature. Inputs and results are reset even when the feature is unchanged.
    pub fn select_feature(&self, feature: Feature) -> Transition {
        self.dispatch(Action::SelectFeature(feature))
    }

    pub fn select_summarizer_mode(&self, mode: SummarizerMode) -> Transition {
        self.dispatch(Action::SelectSummarizerMode(mode))
    }

    pub fn set_file(&self, file: Option<UploadedFile>) -> Transition {
        self.dispatch(Action::SetFile(file))
    }

    pub fn set_text<S: Into<String>>(&self, text: S) -> Transition {
        self.dispatch(Action::SetText(text.into()))
    }

    pub fn set_summary_length(&self, length: SummaryLength) -> Transition {
        self.dispatch(Action::SetSummaryLength(length))
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.submissions.submit().await
    }

    /// First half of [`submit`](Self::submit): validation and the state change
    /// happen now, the remote call when the returned request is finished.
    pub fn begin_submit(&self) -> Result<PendingSubmission<I>, SubmitOutcome> {
        self.submissions.begin()
    }

    /// Copy whatever result is on screen. `None` when there is nothing to copy.
    pub async fn copy_result(&self) -> Option<CopyOutcome> {
        let text = self.with_session(|s| present(s).copyable().map(str::to_string))?;
        Some(self.clipboard.copy(&text).await)
    }

    pub async fn copy(&self, text: &str) -> CopyOutcome {
        self.clipboard.copy(text).await
    }

    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(lock(&self.store).session())
    }

    pub fn snapshot(&self) -> Session {
        self.with_session(Session::clone)
    }
}

// Simple in-crate mocks for demo/testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use crate::ports::{ClipboardError, InferenceError};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Summarize { input: SummaryInput, sentence_count: u8 },
        Paraphrase { text: String },
    }

    struct Script {
        replies: Mutex<VecDeque<Result<String, InferenceError>>>,
        calls: Mutex<Vec<Call>>,
        started: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    /// Replies from a queue; the last reply repeats once the queue is down to one.
    #[derive(Clone)]
    pub struct ScriptedInference(Arc<Script>);

    impl ScriptedInference {
        fn build(replies: Vec<Result<String, InferenceError>>, gate: Option<Arc<Notify>>) -> Self {
            Self(Arc::new(Script {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
                started: AtomicUsize::new(0),
                gate,
            }))
        }

        pub fn replying(replies: Vec<Result<String, InferenceError>>) -> Self {
            Self::build(replies, None)
        }

        pub fn ok<S: Into<String>>(text: S) -> Self {
            Self::replying(vec![Ok(text.into())])
        }

        pub fn failing(err: InferenceError) -> Self {
            Self::replying(vec![Err(err)])
        }

        /// Each call waits for one `notify_one` on the returned handle before replying.
        pub fn gated(replies: Vec<Result<String, InferenceError>>) -> (Self, Arc<Notify>) {
            let gate = Arc::new(Notify::new());
            (Self::build(replies, Some(gate.clone())), gate)
        }

        /// Number of calls that reached the collaborator.
        pub fn call_count(&self) -> usize {
            self.0.started.load(Ordering::SeqCst)
        }

        pub fn calls(&self) -> Vec<Call> {
            self.0.calls.lock().unwrap().clone()
        }

        async fn reply(&self, call: Call) -> Result<String, InferenceError> {
            self.0.started.fetch_add(1, Ordering::SeqCst);
            self.0.calls.lock().unwrap().push(call);
            if let Some(gate) = &self.0.gate {
                gate.notified().await;
            }
            let mut replies = self.0.replies.lock().unwrap();
            match replies.len() {
                0 => Ok(String::new()),
                1 => replies[0].clone(),
                _ => replies.pop_front().unwrap_or_else(|| Ok(String::new())),
            }
        }
    }

    #[async_trait]
    impl InferencePort for ScriptedInference {
        async fn summarize(&self, input: SummaryInput, sentence_count: u8) -> Result<String, InferenceError> {
            self.reply(Call::Summarize { input, sentence_count }).await
        }

        async fn paraphrase(&self, text: String) -> Result<String, InferenceError> {
            self.reply(Call::Paraphrase { text }).await
        }
    }

    /// In-memory clipboard; `denied()` builds one that always refuses.
    #[derive(Clone, Default)]
    pub struct MemoryClipboard {
        contents: Arc<Mutex<Option<String>>>,
        deny: bool,
    }

    impl MemoryClipboard {
        pub fn denied() -> Self {
            Self { deny: true, ..Self::default() }
        }

        pub fn contents(&self) -> Option<String> {
            self.contents.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ClipboardPort for MemoryClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::Denied("permission denied".into()));
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }
}
