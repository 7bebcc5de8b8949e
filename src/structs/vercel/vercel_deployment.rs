use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VercelDeploymentList {
    #[serde(default)]
    pub deployments: Vec<VercelDeployment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VercelDeployment {
    pub uid: String,
    pub url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
