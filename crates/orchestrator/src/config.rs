use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use orchestrator_core::config::OrchestratorConfig;
use orchestrator_core::session::SummaryLength;

use crate::constants::env;

/// Host configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub orchestrator: OrchestratorConfig,
    pub request_timeout: Option<Duration>,
}

/// Load `.env` from the current directory or one of its parents (best-effort).
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut orchestrator = OrchestratorConfig::default();

        if let Some(raw) = lookup(env::PARAPHRASE_MAX_CHARS) {
            let max: usize = raw.trim().parse()
                .with_context(|| format!("{} must be a positive integer, got {:?}", env::PARAPHRASE_MAX_CHARS, raw))?;
            if max == 0 {
                return Err(anyhow!("{} must be greater than zero", env::PARAPHRASE_MAX_CHARS));
            }
            orchestrator = orchestrator.with_paraphrase_max_chars(max);
        }

        if let Some(raw) = lookup(env::SUMMARY_LENGTH) {
            let n: u8 = raw.trim().parse()
                .with_context(|| format!("{} must be a number, got {:?}", env::SUMMARY_LENGTH, raw))?;
            let length = SummaryLength::try_from(n).context(env::SUMMARY_LENGTH)?;
            orchestrator = orchestrator.with_summary_length(length);
        }

        let request_timeout = match lookup(env::REQUEST_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse()
                    .with_context(|| format!("{} must be a number of seconds, got {:?}", env::REQUEST_TIMEOUT_SECS, raw))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self { orchestrator, request_timeout })
    }
}
