use serde::{Deserialize, Serialize};

/// One entry of the GitHub contents API. Directory listings omit
/// `content`/`encoding`; file fetches carry base64 content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubContent {
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub size: u64,
    pub content: Option<String>,
    pub encoding: Option<String>,
}

impl GithubContent {
    pub fn is_dir(&self) -> bool {
        self.content_type == "dir"
    }

    pub fn is_file(&self) -> bool {
        self.content_type == "file"
    }
}
