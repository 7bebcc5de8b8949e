use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeploymentConfig {
    #[serde(default = "ConfigHelper::default_deployment_enabled")]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_vercel_token_env")]
    pub token_env: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_deployment_enabled(),
            token_env: ConfigHelper::default_vercel_token_env(),
        }
    }
}
