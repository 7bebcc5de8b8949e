use crate::config::constants::{
    AI_API_KEY_ENV, DEFAULT_DASHBOARD_PORT, GITHUB_TOKEN_ENV, MAX_ENTRIES_PER_DIR,
    MAX_SCANNED_FILES, MAX_TREE_DEPTH, VERCEL_TOKEN_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_github_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_ai_key_env() -> String {
        AI_API_KEY_ENV.to_string()
    }

    pub fn default_vercel_token_env() -> String {
        VERCEL_TOKEN_ENV.to_string()
    }

    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        "gemini-1.5-pro".to_string()
    }

    pub fn default_max_output_tokens() -> u32 {
        8192
    }

    pub fn default_temperature() -> f32 {
        0.7
    }

    pub fn default_deployment_enabled() -> bool {
        true
    }

    pub fn default_max_tree_depth() -> usize {
        MAX_TREE_DEPTH
    }

    pub fn default_max_entries_per_dir() -> usize {
        MAX_ENTRIES_PER_DIR
    }

    pub fn default_max_scanned_files() -> usize {
        MAX_SCANNED_FILES
    }

    pub fn default_dashboard_port() -> u16 {
        DEFAULT_DASHBOARD_PORT
    }
}
