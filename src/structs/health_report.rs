use serde::{Deserialize, Serialize};
use crate::enums::grade::Grade;
use crate::structs::health_check::HealthCheck;
use crate::structs::security_report::SecurityReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: u32,
    pub grade: Grade,
    pub checks: Vec<HealthCheck>,
    pub security: SecurityReport,
}
