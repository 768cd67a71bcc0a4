use std::path::PathBuf;

use orchestrator_core::session::{Feature, SummarizerMode, SummaryLength};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectFeature(Feature),
    Mode(SummarizerMode),
    File(PathBuf),
    ClearFile,
    Text(String),
    Length(SummaryLength),
    Submit,
    Copy,
    Show,
    Help,
    Quit,
}
