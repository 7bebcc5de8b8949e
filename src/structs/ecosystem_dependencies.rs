use serde::{Deserialize, Serialize};

/// Dependencies declared for one package ecosystem, in the order the
/// manifests listed them. Present for every probed ecosystem, even when
/// no manifest was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcosystemDependencies {
    pub ecosystem: String,
    pub packages: Vec<String>,
}

impl EcosystemDependencies {
    pub fn empty(ecosystem: &str) -> Self {
        Self {
            ecosystem: ecosystem.to_string(),
            packages: Vec::new(),
        }
    }
}
