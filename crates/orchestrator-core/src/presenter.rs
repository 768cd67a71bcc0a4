use crate::session::{Feature, RequestState, Session};

pub const LOADING_MESSAGE: &str = "AI is working, please wait...";
pub const PARAPHRASE_WAIT_NOTE: &str = "Paraphrasing may take 1-2 minutes.";
pub const PLACEHOLDER_MESSAGE: &str = "Results will appear here after you process your input.";

/// The one thing the result area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Loading { note: Option<&'static str> },
    Error(&'a str),
    Summary(&'a str),
    /// Original text beside the generated one.
    Paraphrase { original: &'a str, generated: &'a str },
    Placeholder,
}

impl View<'_> {
    /// Text a copy action would put on the clipboard.
    pub fn copyable(&self) -> Option<&str> {
        match self {
            View::Summary(text) => Some(*text),
            View::Paraphrase { generated, .. } => Some(*generated),
            _ => None,
        }
    }
}

/// Loading > Error > result of the active feature > Placeholder.
pub fn present(session: &Session) -> View<'_> {
    match session.request() {
        RequestState::Submitting(_) => {
            let note = (session.active_feature() == Feature::Paraphraser).then_some(PARAPHRASE_WAIT_NOTE);
            return View::Loading { note };
        }
        RequestState::Failed(reason) => return View::Error(reason),
        RequestState::Idle | RequestState::Succeeded => {}
    }

    match session.active_feature() {
        Feature::Summarizer if !session.summary().is_empty() => View::Summary(session.summary()),
        Feature::Paraphraser if !session.paraphrased_text().is_empty() => View::Paraphrase {
            original: session.original_text(),
            generated: session.paraphrased_text(),
        },
        _ => View::Placeholder,
    }
}
