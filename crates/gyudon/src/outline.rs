//! Serializable snapshots of a command tree.

use serde::Serialize;

use crate::path::path_to_string;
use crate::spec::FieldSpec;
use crate::tree::{CommandTree, Node};

/// One node of a tree outline, with its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub name: String,
    /// Dot-separated path below the root; empty for the root.
    pub path: String,
    pub specs: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Outline>,
}

impl Outline {
    fn of(node: Node<'_>) -> Self {
        Self {
            name: node.name().to_string(),
            path: path_to_string(&node.path()),
            specs: node.specs().to_vec(),
            children: node.children().map(Outline::of).collect(),
        }
    }

    /// Renders the outline as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl CommandTree {
    /// Snapshots the whole tree, starting at the root.
    pub fn outline(&self) -> Outline {
        Outline::of(self.node(self.root()))
    }
}
