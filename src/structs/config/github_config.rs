use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GithubConfig {
    /// Name of the environment variable holding the API token. The value
    /// itself never lives in the config file.
    #[serde(default = "ConfigHelper::default_github_token_env")]
    pub token_env: String,

    #[serde(default)]
    pub include_forks: bool,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token_env: ConfigHelper::default_github_token_env(),
            include_forks: false,
        }
    }
}
