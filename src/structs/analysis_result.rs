use serde::{Deserialize, Serialize};
use crate::structs::ecosystem_dependencies::EcosystemDependencies;
use crate::structs::language_share::LanguageShare;
use crate::structs::tree_entry::TreeEntry;

/// Everything the analyzer could learn about one repository. Built fresh
/// per request; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub primary_language: Option<String>,
    pub topics: Vec<String>,
    pub license: Option<String>,
    pub has_readme: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_readme: Option<String>,
    pub languages: Vec<LanguageShare>,
    pub dependencies: Vec<EcosystemDependencies>,
    pub structure: Vec<TreeEntry>,
}
