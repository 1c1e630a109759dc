use async_trait::async_trait;

use crate::{
    error::FetchError,
    model::{ResultCount, SearchResponse},
};

/// Anything able to answer a video search. The live implementation is
/// [`ApiService`](super::ApiService); tests script their own.
#[async_trait]
pub trait VideoFetcher: Send + Sync {
    async fn search(&self, query: &str, count: ResultCount) -> Result<SearchResponse, FetchError>;
}
