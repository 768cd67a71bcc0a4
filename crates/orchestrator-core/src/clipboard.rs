use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::ports::{ClipboardError, ClipboardPort};
use crate::state::{lock, Action, SharedStore, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
}

/// Best-effort copy with feedback that clears itself.
pub struct ClipboardService<C: ClipboardPort> {
    store: SharedStore,
    clipboard: Arc<C>,
    ttl: Duration,
    pending_clear: Mutex<Option<CancellationToken>>,
}

impl<C: ClipboardPort> ClipboardService<C> {
    pub fn new(store: SharedStore, clipboard: Arc<C>, ttl: Duration) -> Self {
        Self { store, clipboard, ttl, pending_clear: Mutex::new(None) }
    }

    pub async fn copy(&self, text: &str) -> CopyOutcome {
        let outcome = match self.clipboard.write_text(text).await {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                warn!(error = %e, "copy to clipboard failed");
                CopyOutcome::Failed(e)
            }
        };

        // Holding the timer slot across the dispatch keeps generations and timers in step.
        let mut pending = self.pending_clear.lock().unwrap_or_else(PoisonError::into_inner);
        let shown = lock(&self.store).dispatch(Action::CopyFinished { ok: outcome == CopyOutcome::Copied });
        if let Transition::FeedbackShown { generation } = shown {
            if let Some(previous) = pending.take() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            *pending = Some(token.clone());
            self.schedule_clear(token, generation);
        }
        outcome
    }

    /// Clears the feedback after the delay unless a newer copy replaced `token`.
    fn schedule_clear(&self, token: CancellationToken, generation: u64) {
        let store = self.store.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => debug!(generation, "copy feedback clear superseded"),
                _ = tokio::time::sleep(ttl) => {
                    lock(&store).dispatch(Action::ClearCopyFeedback { generation });
                }
            }
        });
    }
}
