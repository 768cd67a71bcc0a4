use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use orchestrator_core::ports::{ClipboardError, ClipboardPort};

/// System clipboard via `arboard`. The handle is kept alive between writes
/// because some platforms drop the contents with it.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let handle = self.handle.clone();
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_none() {
                *guard = Some(arboard::Clipboard::new().map_err(map_arboard_error)?);
            }
            match guard.as_mut() {
                Some(clipboard) => clipboard.set_text(text).map_err(map_arboard_error),
                None => Err(ClipboardError::Unavailable("clipboard not initialised".into())),
            }
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))??;

        debug!("copied result to system clipboard");
        Ok(())
    }
}

fn map_arboard_error(e: arboard::Error) -> ClipboardError {
    match e {
        arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(e.to_string()),
        other => ClipboardError::Denied(other.to_string()),
    }
}
