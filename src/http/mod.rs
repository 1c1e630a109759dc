pub mod traits;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::{
    config::SearchConfig,
    error::FetchError,
    model::{ResultCount, SearchResponse},
};

pub use traits::VideoFetcher;

pub struct ApiService {
    client: reqwest::Client,
    endpoint: Url,
}

impl ApiService {
    pub fn new(config: &SearchConfig) -> color_eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let endpoint = Url::parse(&config.endpoint)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// `<endpoint>?q=<query>&numResults=<count>`, keeping any query the
    /// endpoint already carries.
    pub fn search_url(&self, query: &str, count: ResultCount) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("numResults", &count.to_string());
        url
    }
}

#[async_trait]
impl VideoFetcher for ApiService {
    async fn search(&self, query: &str, count: ResultCount) -> Result<SearchResponse, FetchError> {
        let url = self.search_url(query, count);
        debug!(%url, "requesting videos");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json::<SearchResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(endpoint: &str) -> ApiService {
        ApiService::new(&SearchConfig {
            endpoint: endpoint.to_string(),
            ..SearchConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn search_url_encodes_query() {
        let api = service("https://videos.example/assignmentVideos");
        let url = api.search_url("full body & core", ResultCount::new(3).unwrap());
        assert_eq!(
            url.as_str(),
            "https://videos.example/assignmentVideos?q=full+body+%26+core&numResults=3"
        );
    }

    #[test]
    fn search_url_keeps_existing_params() {
        let api = service("https://videos.example/search?key=abc");
        let url = api.search_url("yoga", ResultCount::default());
        assert_eq!(
            url.as_str(),
            "https://videos.example/search?key=abc&q=yoga&numResults=6"
        );
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = SearchConfig {
            endpoint: "not a url".to_string(),
            ..SearchConfig::default()
        };
        assert!(ApiService::new(&config).is_err());
    }
}
