//! Error types for tree construction.

use thiserror::Error;

/// Errors raised while turning a commander into a tree node.
///
/// Failures returned by a commander's own [`run`](crate::Commander::run) are
/// not represented here: they travel through
/// [`CommandTree::execute`](crate::CommandTree::execute) as the original
/// `anyhow::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The commander does not declare a struct-like record.
    #[error("commander `{type_name}` must be a struct-like record")]
    InvalidCommander { type_name: String },

    /// An exported field was declared without a name.
    #[error("commander `{commander}` declares an exported field with an empty name")]
    EmptyFieldName { commander: String },
}

impl Error {
    pub(crate) fn invalid_commander(type_name: impl Into<String>) -> Self {
        Self::InvalidCommander {
            type_name: type_name.into(),
        }
    }
}

/// Result type for tree construction.
pub type Result<T> = std::result::Result<T, Error>;
