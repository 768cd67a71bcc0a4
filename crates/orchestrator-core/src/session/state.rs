use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::{Feature, SummarizerMode};

/// Monotonic identifier handed to each submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

/// What a request was issued for. A resolution is only applied while the
/// session still matches its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTag {
    pub id: RequestId,
    pub feature: Feature,
    /// `None` for the paraphraser, which has a single input.
    pub mode: Option<SummarizerMode>,
}

/// Lifecycle of the current submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting(RequestTag),
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting(_))
    }

    pub fn in_flight(&self) -> Option<&RequestTag> {
        match self {
            RequestState::Submitting(tag) => Some(tag),
            _ => None,
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Idle => write!(f, "Idle"),
            RequestState::Submitting(tag) => write!(f, "Submitting {} ({})", tag.id, tag.feature),
            RequestState::Succeeded => write!(f, "Succeeded"),
            RequestState::Failed(reason) => write!(f, "Failed: {}", reason),
        }
    }
}
