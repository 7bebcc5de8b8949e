use serde::{Deserialize, Serialize};

/// One language's slice of the repository, as an integer percentage.
/// Breakdowns are ordered largest share first and always sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percent: u32,
}

impl LanguageShare {
    pub fn new(name: &str, percent: u32) -> Self {
        Self {
            name: name.to_string(),
            percent,
        }
    }
}
