use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub language: Option<String>,
    pub stars: u64,
    pub url: String,
    pub private: bool,
    pub fork: bool,
    pub has_readme: bool,
    pub updated_at: Option<DateTime<Utc>>,
}
