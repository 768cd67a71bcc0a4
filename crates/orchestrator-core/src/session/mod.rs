pub mod model;
pub mod state;
pub mod types;

pub use model::Session;
pub use state::{RequestId, RequestState, RequestTag};
pub use types::{Feature, InvalidSummaryLength, SummarizerMode, SummaryLength, UploadedFile};
