use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    #[serde(rename = "video")]
    pub video_url: String,
    pub heading: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<VideoItem>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}
