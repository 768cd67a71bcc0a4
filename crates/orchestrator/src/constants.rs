pub const PROMPT: &str = "docassist> ";
pub const DEFAULT_LOG_FILTER: &str = "docassist=info,orchestrator_core=info,orchestrator_adapters=info";

pub mod env {
    pub const PARAPHRASE_MAX_CHARS: &str = "DOCASSIST_PARAPHRASE_MAX_CHARS";
    pub const SUMMARY_LENGTH: &str = "DOCASSIST_SUMMARY_LENGTH";
    pub const REQUEST_TIMEOUT_SECS: &str = "DOCASSIST_REQUEST_TIMEOUT_SECS";
}

pub mod messages {
    pub const UNSUPPORTED_FILE: &str = "Only .pdf and .docx files can be uploaded.";
    pub const FILE_INPUT_INACTIVE: &str = "Switch to the summarizer and `mode file` before choosing a file.";
    pub const MODE_INACTIVE: &str = "Input mode only applies to the summarizer.";
    pub const NOTHING_TO_COPY: &str = "Nothing to copy yet.";
    pub const ALREADY_RUNNING: &str = "A request is already running; wait for it to finish.";
}
