use super::state::RequestState;
use super::types::{Feature, SummarizerMode, SummaryLength, UploadedFile};

/// Client-side state for one visit. Only the store mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub(crate) active_feature: Feature,
    pub(crate) summarizer_mode: SummarizerMode,
    pub(crate) file: Option<UploadedFile>,
    pub(crate) summary_length: SummaryLength,
    pub(crate) original_text: String,
    pub(crate) summary: String,
    pub(crate) paraphrased_text: String,
    pub(crate) request: RequestState,
    pub(crate) copy_feedback: Option<String>,
}

impl Session {
    pub fn new(summary_length: SummaryLength) -> Self {
        Self { summary_length, ..Self::default() }
    }

    pub fn active_feature(&self) -> Feature {
        self.active_feature
    }

    pub fn summarizer_mode(&self) -> SummarizerMode {
        self.summarizer_mode
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn summary_length(&self) -> SummaryLength {
        self.summary_length
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn paraphrased_text(&self) -> &str {
        &self.paraphrased_text
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn is_submitting(&self) -> bool {
        self.request.is_submitting()
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn copy_feedback(&self) -> Option<&str> {
        self.copy_feedback.as_deref()
    }

    /// Mode component of a request tag for the current session.
    pub fn mode_tag(&self) -> Option<SummarizerMode> {
        match self.active_feature {
            Feature::Summarizer => Some(self.summarizer_mode),
            Feature::Paraphraser => None,
        }
    }

    /// The result belonging to the active feature, if any.
    pub fn current_result(&self) -> Option<&str> {
        let text = match self.active_feature {
            Feature::Summarizer => &self.summary,
            Feature::Paraphraser => &self.paraphrased_text,
        };
        (!text.is_empty()).then_some(text.as_str())
    }

    /// Clean slate for a newly selected feature. Keeps mode and summary length.
    pub(crate) fn reset_for_feature(&mut self, feature: Feature) {
        self.active_feature = feature;
        self.file = None;
        self.original_text.clear();
        self.summary.clear();
        self.paraphrased_text.clear();
        self.request = RequestState::Idle;
        self.copy_feedback = None;
    }

    pub(crate) fn store_result(&mut self, feature: Feature, text: String) {
        match feature {
            Feature::Summarizer => {
                self.summary = text;
                self.paraphrased_text.clear();
            }
            Feature::Paraphraser => {
                self.paraphrased_text = text;
                self.summary.clear();
            }
        }
        self.request = RequestState::Succeeded;
    }
}
