use std::io::{stdout, Write};

use orchestrator_core::presenter::{present, LOADING_MESSAGE, PLACEHOLDER_MESSAGE};
use orchestrator_core::session::{Feature, Session};
use orchestrator_core::View;

use crate::constants::PROMPT;

pub fn print_welcome(backend_configured: bool) {
    println!("\nAI Document Assistant");
    println!("━━━━━━━━━━━━━━━━━━━━━");
    println!("Summarize and paraphrase text. Type `help` for commands.");
    if !backend_configured {
        println!("⚠️  No backend configured; submissions will fail.");
    }
    println!();
}

pub fn print_help() {
    println!("  summarizer | paraphraser   switch feature (clears inputs and results)");
    println!("  mode file | mode text      summarizer input source");
    println!("  file <path> | file none    choose a .pdf or .docx document");
    println!("  text <content>             set the text to process");
    println!("  length 3|5|10|15|20        summary length in sentences");
    println!("  submit                     process the input");
    println!("  copy                       copy the result to the clipboard");
    println!("  show                       redraw the current view");
    println!("  quit                       leave");
}

pub fn print_goodbye() {
    println!("\nGoodbye!");
}

pub fn show_prompt() {
    print!("{}", PROMPT);
    let _ = stdout().flush();
}

pub fn show_notice(msg: &str) {
    println!("⚠️  {}", msg);
}

pub fn render(session: &Session) {
    println!("{}", header(session));
    match present(session) {
        View::Loading { note } => {
            println!("⏳ {}", LOADING_MESSAGE);
            if let Some(note) = note {
                println!("   {}", note);
            }
        }
        View::Error(reason) => println!("❌ {}", reason),
        View::Summary(text) => {
            println!("Summary:\n");
            println!("{}\n", text.trim());
        }
        View::Paraphrase { original, generated } => {
            println!("Original:\n{}\n", original.trim());
            println!("Paraphrased:\n{}\n", generated.trim());
        }
        View::Placeholder => println!("{}", PLACEHOLDER_MESSAGE),
    }
    if let Some(feedback) = session.copy_feedback() {
        println!("✅ {}", feedback);
    }
}

fn header(session: &Session) -> String {
    match session.active_feature() {
        Feature::Summarizer => {
            let source = match session.file() {
                Some(f) if session.summarizer_mode() == orchestrator_core::session::SummarizerMode::File => {
                    format!("file {} ({} bytes)", f.name, f.bytes.len())
                }
                _ => format!("{} input", session.summarizer_mode()),
            };
            format!(
                "── summarizer · {} · {} sentences · {} chars ──",
                source,
                session.summary_length().sentences(),
                session.original_text().chars().count()
            )
        }
        Feature::Paraphraser => format!(
            "── paraphraser · {} chars ──",
            session.original_text().chars().count()
        ),
    }
}
