use serde::{Deserialize, Serialize};
use crate::enums::finding_severity::FindingSeverity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityFinding {
    #[serde(rename = "type")]
    pub severity: FindingSeverity,
    pub file_path: String,
    pub message: String,
}

impl SecurityFinding {
    pub fn critical(file_path: &str, message: &str) -> Self {
        Self {
            severity: FindingSeverity::Critical,
            file_path: file_path.to_string(),
            message: message.to_string(),
        }
    }

    pub fn warning(file_path: &str, message: &str) -> Self {
        Self {
            severity: FindingSeverity::Warning,
            file_path: file_path.to_string(),
            message: message.to_string(),
        }
    }
}
