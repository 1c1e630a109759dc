pub mod query;
pub mod video;

pub use query::{QueryState, ResultCount, ResultCountError};
pub use video::{SearchResponse, VideoItem};
