use crate::session::{Feature, Session, SummarizerMode, UploadedFile};

/// Local precondition failure. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please choose a file first.")]
    MissingFile,
    #[error("Text must not be empty.")]
    EmptyText,
}

/// Summarizer input as it will be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryInput {
    Text(String),
    File(UploadedFile),
}

/// Exactly what the remote call needs for the active feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedRequest {
    Summarize { input: SummaryInput, sentence_count: u8 },
    Paraphrase { text: String },
}

impl ValidatedRequest {
    pub fn feature(&self) -> Feature {
        match self {
            ValidatedRequest::Summarize { .. } => Feature::Summarizer,
            ValidatedRequest::Paraphrase { .. } => Feature::Paraphraser,
        }
    }
}

/// Check the active feature's preconditions. The non-authoritative summarizer
/// input is ignored.
pub fn validate(session: &Session) -> Result<ValidatedRequest, ValidationError> {
    match session.active_feature() {
        Feature::Summarizer => {
            let input = match session.summarizer_mode() {
                SummarizerMode::File => {
                    let file = session.file().ok_or(ValidationError::MissingFile)?;
                    SummaryInput::File(file.clone())
                }
                SummarizerMode::Text => SummaryInput::Text(non_blank(session.original_text())?),
            };
            Ok(ValidatedRequest::Summarize {
                input,
                sentence_count: session.summary_length().sentences(),
            })
        }
        Feature::Paraphraser => Ok(ValidatedRequest::Paraphrase {
            text: non_blank(session.original_text())?,
        }),
    }
}

fn non_blank(text: &str) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::EmptyText)
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SummaryLength;

    fn session(feature: Feature, mode: SummarizerMode) -> Session {
        let mut s = Session::new(SummaryLength::Ten);
        s.active_feature = feature;
        s.summarizer_mode = mode;
        s
    }

    #[test]
    fn file_mode_requires_file() {
        let s = session(Feature::Summarizer, SummarizerMode::File);
        assert_eq!(validate(&s), Err(ValidationError::MissingFile));
    }

    #[test]
    fn file_mode_ignores_typed_text() {
        let mut s = session(Feature::Summarizer, SummarizerMode::File);
        s.original_text = "typed before switching".into();
        s.file = Some(UploadedFile::new("a.pdf", vec![7]));

        let req = validate(&s).unwrap();
        assert_eq!(req, ValidatedRequest::Summarize {
            input: SummaryInput::File(UploadedFile::new("a.pdf", vec![7])),
            sentence_count: 10,
        });
    }

    #[test]
    fn text_mode_rejects_whitespace() {
        let mut s = session(Feature::Summarizer, SummarizerMode::Text);
        s.original_text = " \n\t ".into();
        assert_eq!(validate(&s), Err(ValidationError::EmptyText));
    }

    #[test]
    fn paraphrase_keeps_text_verbatim() {
        let mut s = session(Feature::Paraphraser, SummarizerMode::File);
        s.original_text = "  padded  ".into();
        let req = validate(&s).unwrap();
        assert_eq!(req, ValidatedRequest::Paraphrase { text: "  padded  ".into() });
        assert_eq!(req.feature(), Feature::Paraphraser);
    }

    #[test]
    fn paraphrase_rejects_whitespace() {
        let mut s = session(Feature::Paraphraser, SummarizerMode::File);
        s.original_text = "   ".into();
        assert_eq!(validate(&s), Err(ValidationError::EmptyText));
    }
}
