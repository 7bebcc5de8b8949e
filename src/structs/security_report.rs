use serde::{Deserialize, Serialize};
use crate::structs::security_finding::SecurityFinding;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityReport {
    pub issues: Vec<SecurityFinding>,
    pub warnings: Vec<SecurityFinding>,
    pub has_critical: bool,
}

impl SecurityReport {
    pub fn new(issues: Vec<SecurityFinding>, warnings: Vec<SecurityFinding>) -> Self {
        let has_critical = !issues.is_empty();
        Self {
            issues,
            warnings,
            has_critical,
        }
    }
}
