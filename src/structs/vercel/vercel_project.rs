use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VercelProjectList {
    #[serde(default)]
    pub projects: Vec<VercelProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VercelProject {
    pub id: String,
    pub name: String,
    pub link: Option<VercelLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VercelLink {
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}
