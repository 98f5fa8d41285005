//! Design Review data model and collaborator surface
//!
//! The remote Hub is reached exclusively through [`ReviewApi`]. Production
//! code implements it over HTTP in `dr-client`; tests use in-memory fakes.

use crate::error::Result;
use crate::types::{AttachmentId, CommentId};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Reference to a Design Review thread within a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Design Review number within the repository
    pub number: u64,
}

impl ReviewRef {
    /// Build a review reference from an `owner/repo` string and a number.
    ///
    /// The repository string must contain exactly one `/`.
    pub fn from_repository(repository: &str, number: u64) -> Result<Self> {
        match repository.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    number,
                })
            }
            _ => Err(crate::error::Error::InvalidRepository(
                repository.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for ReviewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// A comment on a Design Review, as returned by the Hub
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Comment identifier
    pub id: CommentId,
    /// Full comment body, including any marker line
    pub body: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

/// A file attached to a comment
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Attachment identifier
    pub id: AttachmentId,
    /// File name of the attachment
    pub name: String,
}

/// Operations the Hub exposes on a Design Review and its comments.
///
/// All calls are blocking and performed strictly in sequence; the trait
/// offers no mutual exclusion over the review's comments.
pub trait ReviewApi {
    /// List the review's comments, ordered by creation
    fn list_comments(&self, review: &ReviewRef) -> Result<Vec<Comment>>;

    /// Create a new comment on the review
    fn create_comment(&self, review: &ReviewRef, body: &str) -> Result<Comment>;

    /// Replace the body of an existing comment
    fn update_comment(&self, review: &ReviewRef, id: CommentId, body: &str) -> Result<Comment>;

    /// List a comment's attachments
    fn list_attachments(&self, review: &ReviewRef, id: CommentId) -> Result<Vec<Attachment>>;

    /// Delete one attachment from a comment
    fn delete_attachment(
        &self,
        review: &ReviewRef,
        id: CommentId,
        attachment: AttachmentId,
    ) -> Result<()>;

    /// Attach a named binary blob to a comment
    fn create_attachment(
        &self,
        review: &ReviewRef,
        id: CommentId,
        name: &str,
        content: Vec<u8>,
    ) -> Result<Attachment>;
}
