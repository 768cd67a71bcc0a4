use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use orchestrator_adapters::{HttpInference, SystemClipboard};
use orchestrator_core::clipboard::CopyOutcome;
use orchestrator_core::session::{SummarizerMode, UploadedFile};
use orchestrator_core::state::Transition;
use orchestrator_core::submission::SubmitOutcome;
use orchestrator_core::RequestOrchestrator;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::constants::messages;
use crate::types::Command;
use crate::ui;

type Orchestrator = RequestOrchestrator<HttpInference, SystemClipboard>;

pub struct App {
    orchestrator: Arc<Orchestrator>,
    backend_configured: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let inference = HttpInference::from_env(config.request_timeout)?;
        let backend_configured = inference.is_configured();
        Ok(Self {
            orchestrator: Arc::new(RequestOrchestrator::new(inference, SystemClipboard::new(), config.orchestrator)),
            backend_configured,
        })
    }

    pub fn backend_configured(&self) -> bool {
        self.backend_configured
    }

    pub fn render(&self) {
        self.orchestrator.with_session(ui::render);
    }

    pub async fn execute(&self, cmd: Command) -> Result<()> {
        debug!(?cmd, "command");
        let show_help = cmd == Command::Help;
        match cmd {
            Command::SelectFeature(feature) => {
                self.orchestrator.select_feature(feature);
            }
            Command::Mode(mode) => {
                if let Transition::Ignored(_) = self.orchestrator.select_summarizer_mode(mode) {
                    ui::show_notice(messages::MODE_INACTIVE);
                }
            }
            Command::File(path) => self.choose_file(&path).await?,
            Command::ClearFile => {
                self.orchestrator.set_file(None);
            }
            Command::Text(text) => {
                self.orchestrator.set_text(text);
            }
            Command::Length(length) => {
                self.orchestrator.set_summary_length(length);
            }
            Command::Submit => self.submit(),
            Command::Copy => self.copy().await,
            Command::Show | Command::Help | Command::Quit => {}
        }

        if show_help {
            ui::print_help();
        } else {
            self.render();
        }
        Ok(())
    }

    async fn choose_file(&self, path: &Path) -> Result<()> {
        let in_file_mode = self.orchestrator.with_session(|s| s.mode_tag() == Some(SummarizerMode::File));
        if !in_file_mode {
            ui::show_notice(messages::FILE_INPUT_INACTIVE);
            return Ok(());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = UploadedFile::new(name, Vec::new());
        if !file.has_accepted_extension() {
            ui::show_notice(messages::UNSUPPORTED_FILE);
            return Ok(());
        }

        let bytes = match tokio::fs::read(path).await.with_context(|| format!("reading {}", path.display())) {
            Ok(b) => b,
            Err(e) => {
                ui::show_notice(&format!("{:#}", e));
                return Ok(());
            }
        };
        info!(file = %file.name, bytes = bytes.len(), "file selected");
        self.orchestrator.set_file(Some(UploadedFile { bytes, ..file }));
        Ok(())
    }

    /// Validation and the loading state happen now; the remote call runs in
    /// the background so the form stays usable while waiting.
    fn submit(&self) {
        let pending = match self.orchestrator.begin_submit() {
            Ok(p) => p,
            Err(SubmitOutcome::AlreadyInFlight) => {
                ui::show_notice(messages::ALREADY_RUNNING);
                return;
            }
            Err(_) => return,
        };

        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            let id = pending.tag().id;
            let outcome = pending.finish().await;
            debug!(%id, ?outcome, "submission finished");
            if outcome != SubmitOutcome::Discarded {
                println!();
                orchestrator.with_session(ui::render);
                ui::show_prompt();
            }
        });
    }

    async fn copy(&self) {
        match self.orchestrator.copy_result().await {
            None => ui::show_notice(messages::NOTHING_TO_COPY),
            Some(CopyOutcome::Copied) => {}
            Some(CopyOutcome::Failed(e)) => debug!(error = %e, "clipboard write failed"),
        }
    }
}
