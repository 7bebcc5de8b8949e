use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub project: String,
    pub url: String,
}
