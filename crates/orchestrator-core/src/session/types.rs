use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two text-transformation operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    #[default]
    Summarizer,
    Paraphraser,
}

/// Which summarizer input widget is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerMode {
    #[default]
    File,
    Text,
}

/// Number of sentences the summary should contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SummaryLength {
    Three,
    #[default]
    Five,
    Ten,
    Fifteen,
    Twenty,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 5] = [
        SummaryLength::Three,
        SummaryLength::Five,
        SummaryLength::Ten,
        SummaryLength::Fifteen,
        SummaryLength::Twenty,
    ];

    pub fn sentences(self) -> u8 {
        match self {
            SummaryLength::Three => 3,
            SummaryLength::Five => 5,
            SummaryLength::Ten => 10,
            SummaryLength::Fifteen => 15,
            SummaryLength::Twenty => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported summary length {0}; expected one of 3, 5, 10, 15, 20")]
pub struct InvalidSummaryLength(pub u8);

impl TryFrom<u8> for SummaryLength {
    type Error = InvalidSummaryLength;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        SummaryLength::ALL
            .into_iter()
            .find(|l| l.sentences() == n)
            .ok_or(InvalidSummaryLength(n))
    }
}

impl From<SummaryLength> for u8 {
    fn from(l: SummaryLength) -> u8 {
        l.sentences()
    }
}

/// A document picked for upload. The backend does the parsing.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Extensions the upload widget offers.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 2] = ["pdf", "docx"];

    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    pub fn has_accepted_extension(&self) -> bool {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| Self::ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Summarizer => write!(f, "summarizer"),
            Feature::Paraphraser => write!(f, "paraphraser"),
        }
    }
}

impl fmt::Display for SummarizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizerMode::File => write!(f, "file"),
            SummarizerMode::Text => write!(f, "text"),
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summarizer" | "summarize" => Ok(Feature::Summarizer),
            "paraphraser" | "paraphrase" => Ok(Feature::Paraphraser),
            other => Err(format!("unknown feature: {}", other)),
        }
    }
}

impl FromStr for SummarizerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(SummarizerMode::File),
            "text" => Ok(SummarizerMode::Text),
            other => Err(format!("unknown summarizer mode: {}", other)),
        }
    }
}
