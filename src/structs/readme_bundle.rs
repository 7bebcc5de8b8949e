use serde::{Deserialize, Serialize};
use crate::structs::analysis_result::AnalysisResult;

/// Output of one README generation: the generated markdown alongside the
/// analysis it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeBundle {
    pub readme: String,
    pub analysis: AnalysisResult,
    pub deployment_url: Option<String>,
}
