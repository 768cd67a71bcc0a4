use std::time::Duration;

use crate::session::SummaryLength;

pub const DEFAULT_PARAPHRASE_MAX_CHARS: usize = 1000;
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_millis(2000);

/// Knobs the host decides on; none of them are user input.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    /// Paraphraser text is truncated to this many characters when captured.
    pub paraphrase_max_chars: usize,
    pub default_summary_length: SummaryLength,
    /// How long copy feedback stays visible.
    pub copy_feedback_ttl: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            paraphrase_max_chars: DEFAULT_PARAPHRASE_MAX_CHARS,
            default_summary_length: SummaryLength::default(),
            copy_feedback_ttl: COPY_FEEDBACK_TTL,
        }
    }
}

impl OrchestratorConfig {
    pub fn with_paraphrase_max_chars(mut self, max: usize) -> Self {
        self.paraphrase_max_chars = max;
        self
    }

    pub fn with_summary_length(mut self, length: SummaryLength) -> Self {
        self.default_summary_length = length;
        self
    }
}
