use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_max_tree_depth")]
    pub max_tree_depth: usize,

    #[serde(default = "ConfigHelper::default_max_entries_per_dir")]
    pub max_entries_per_dir: usize,

    #[serde(default = "ConfigHelper::default_max_scanned_files")]
    pub max_scanned_files: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_tree_depth: ConfigHelper::default_max_tree_depth(),
            max_entries_per_dir: ConfigHelper::default_max_entries_per_dir(),
            max_scanned_files: ConfigHelper::default_max_scanned_files(),
        }
    }
}
