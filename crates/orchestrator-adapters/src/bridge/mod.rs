pub mod clipboard;
pub mod inference;
