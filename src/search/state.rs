use crate::{error::FetchError, event::events::SearchOutcome, model::VideoItem};

pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";
pub const STATUS_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";
pub const NO_RESULTS_MESSAGE: &str = "No videos found.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Results(Vec<VideoItem>),
    Error(String),
}

impl ViewState {
    /// Maps a finished request onto what the screen should show. Only a
    /// successful, non-empty payload produces `Results`.
    pub fn classify(outcome: SearchOutcome) -> Self {
        match outcome {
            Err(FetchError::Status(_)) => ViewState::Error(STATUS_ERROR_MESSAGE.to_string()),
            Err(_) => ViewState::Error(TRANSPORT_ERROR_MESSAGE.to_string()),
            Ok(response) if response.is_success() && !response.results.is_empty() => {
                ViewState::Results(response.results)
            }
            Ok(_) => ViewState::Error(NO_RESULTS_MESSAGE.to_string()),
        }
    }

    pub fn videos(&self) -> &[VideoItem] {
        match self {
            ViewState::Results(videos) => videos,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }
}
