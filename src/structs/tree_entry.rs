use serde::{Deserialize, Serialize};
use crate::enums::entry_kind::EntryKind;

/// One node of the bounded repository structure. Directories own their
/// children, so the value is a tree, never a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeEntry>,
}

impl TreeEntry {
    pub fn file(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    pub fn dir(name: &str, path: &str, children: Vec<TreeEntry>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: EntryKind::Dir,
            children,
        }
    }

    /// Nesting depth of this subtree: a childless entry has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
