pub mod bridge;

pub use bridge::clipboard::SystemClipboard;
pub use bridge::inference::{map_client_error, HttpInference};
