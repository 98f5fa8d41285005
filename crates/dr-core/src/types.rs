//! Core type definitions for post-dr-comment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a comment, assigned by the Hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a comment attachment, assigned by the Hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(pub i64);

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(CommentId(42).to_string(), "42");
        assert_eq!(AttachmentId(7).to_string(), "7");
    }

    #[test]
    fn test_id_transparent_serde() {
        let id: CommentId = serde_json::from_str("42").unwrap();
        assert_eq!(id, CommentId(42));
        assert_eq!(serde_json::to_string(&AttachmentId(7)).unwrap(), "7");
    }
}
