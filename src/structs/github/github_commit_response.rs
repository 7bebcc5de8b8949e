use serde::{Deserialize, Serialize};

/// Response body of the create-or-update contents call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubCommitResponse {
    pub content: Option<GithubCommitContent>,
    pub commit: GithubCommitInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubCommitContent {
    pub path: String,
    pub sha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubCommitInfo {
    pub sha: String,
}
