use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub path: String,
    pub revision: String,
    pub commit_sha: String,
}
