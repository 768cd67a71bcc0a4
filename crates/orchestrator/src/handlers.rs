use std::path::PathBuf;

use anyhow::Result;
use orchestrator_core::session::{Feature, SummarizerMode, SummaryLength};

use crate::app::App;
use crate::types::Command;

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r),
        None => (line.trim_end(), ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "summarizer" | "summarize" | "paraphraser" | "paraphrase" => word.parse::<Feature>().map(Command::SelectFeature),
        "mode" => rest.parse::<SummarizerMode>().map(Command::Mode),
        "file" if rest.trim().is_empty() => Err("usage: file <path> | file none".into()),
        "file" if rest.trim() == "none" => Ok(Command::ClearFile),
        "file" => Ok(Command::File(PathBuf::from(rest.trim()))),
        // Text is taken verbatim so leading and trailing spaces survive.
        "text" => Ok(Command::Text(rest.to_string())),
        "length" => {
            let n: u8 = rest.trim().parse().map_err(|_| format!("not a number: {:?}", rest.trim()))?;
            SummaryLength::try_from(n).map(Command::Length).map_err(|e| e.to_string())
        }
        "submit" | "go" => Ok(Command::Submit),
        "copy" => Ok(Command::Copy),
        "show" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {} (try `help`)", other)),
    }
}

pub struct InputHandler;

impl InputHandler {
    /// Returns `true` when the user asked to quit.
    pub async fn handle_line(app: &App, line: &str) -> Result<bool> {
        match parse_command(line) {
            Ok(Command::Quit) => Ok(true),
            Ok(cmd) => {
                app.execute(cmd).await?;
                Ok(false)
            }
            Err(msg) => {
                crate::ui::show_notice(&msg);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_and_mode() {
        assert_eq!(parse_command("paraphraser"), Ok(Command::SelectFeature(Feature::Paraphraser)));
        assert_eq!(parse_command("Summarizer"), Ok(Command::SelectFeature(Feature::Summarizer)));
        assert_eq!(parse_command("mode text"), Ok(Command::Mode(SummarizerMode::Text)));
        assert!(parse_command("mode audio").is_err());
    }

    #[test]
    fn text_is_kept_verbatim() {
        assert_eq!(parse_command("text   two  spaces "), Ok(Command::Text("  two  spaces ".into())));
        assert_eq!(parse_command("text"), Ok(Command::Text(String::new())));
    }

    #[test]
    fn file_paths_and_clearing() {
        assert_eq!(parse_command("file docs/report.pdf"), Ok(Command::File(PathBuf::from("docs/report.pdf"))));
        assert_eq!(parse_command("file none"), Ok(Command::ClearFile));
        assert!(parse_command("file").is_err());
    }

    #[test]
    fn length_must_be_offered_value() {
        assert_eq!(parse_command("length 20"), Ok(Command::Length(SummaryLength::Twenty)));
        assert!(parse_command("length 4").is_err());
        assert!(parse_command("length lots").is_err());
    }

    #[test]
    fn blank_line_shows_view() {
        assert_eq!(parse_command(""), Ok(Command::Show));
        assert_eq!(parse_command("nonsense"), Err("unknown command: nonsense (try `help`)".into()));
    }
}
