pub mod clipboard;
pub mod inference;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use inference::{InferenceError, InferencePort};
