use crate::{error::FetchError, model::SearchResponse};

pub type SearchOutcome = Result<SearchResponse, FetchError>;

#[derive(Debug, Clone)]
pub enum Event {
    /// A request issued for `generation` completed, successfully or not.
    SearchFinished {
        generation: u64,
        outcome: SearchOutcome,
    },
}
