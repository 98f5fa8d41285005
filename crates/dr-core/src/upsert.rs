//! Idempotent comment upsert
//!
//! A single "managed" comment per review is re-identified across runs by a
//! hidden marker line prepended to its body. Changing [`COMMENT_MARKER`]
//! breaks idempotence for previously-posted comments.

use crate::error::Result;
use crate::review::{Comment, ReviewApi, ReviewRef};
use tracing::info;

/// Marker identifying the managed comment. Must stay byte-for-byte stable
/// across versions.
pub const COMMENT_MARKER: &str = "<!-- AllSpice Hub Auto-DR Comment -->";

/// Post `body` as the review's managed comment, updating it in place if one
/// already exists.
///
/// The first comment (in creation order) whose body contains
/// [`COMMENT_MARKER`] anywhere is taken to be the managed comment. This is a
/// substring check, not a prefix check: a user comment quoting the marker
/// text would be misidentified. Kept as-is for compatibility.
///
/// Not safe under concurrent invocation against the same review; two racing
/// callers can each create a marked comment. Callers must serialize per
/// review.
pub fn upsert_comment(api: &dyn ReviewApi, review: &ReviewRef, body: &str) -> Result<Comment> {
    let comments = api.list_comments(review)?;
    let marked_body = format!("{COMMENT_MARKER}\n{body}");

    let existing = comments.iter().find(|c| c.body.contains(COMMENT_MARKER));

    if let Some(existing) = existing {
        info!("Updating existing comment.");
        api.update_comment(review, existing.id, &marked_body)
    } else {
        info!("Creating new comment.");
        api.create_comment(review, &marked_body)
    }
}

/// Always create a new comment, without looking for an existing one.
///
/// This path does not prepend the marker, so the resulting comment is not
/// managed and will never be picked up by a later [`upsert_comment`].
pub fn create_comment(api: &dyn ReviewApi, review: &ReviewRef, body: &str) -> Result<Comment> {
    info!("Creating new comment.");
    api.create_comment(review, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::review::Attachment;
    use crate::types::{AttachmentId, CommentId};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// In-memory review with an ordered comment list
    #[derive(Default)]
    struct FakeReview {
        comments: RefCell<Vec<Comment>>,
        next_id: RefCell<i64>,
    }

    impl FakeReview {
        fn with_comments(bodies: &[&str]) -> Self {
            let fake = Self::default();
            for body in bodies {
                fake.push(body);
            }
            fake
        }

        fn push(&self, body: &str) -> Comment {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            let comment = Comment {
                id: CommentId(*next_id),
                body: body.to_string(),
                created_at: Utc::now(),
            };
            self.comments.borrow_mut().push(comment.clone());
            comment
        }

        fn bodies(&self) -> Vec<String> {
            self.comments.borrow().iter().map(|c| c.body.clone()).collect()
        }
    }

    impl ReviewApi for FakeReview {
        fn list_comments(&self, _review: &ReviewRef) -> Result<Vec<Comment>> {
            Ok(self.comments.borrow().clone())
        }

        fn create_comment(&self, _review: &ReviewRef, body: &str) -> Result<Comment> {
            Ok(self.push(body))
        }

        fn update_comment(
            &self,
            _review: &ReviewRef,
            id: CommentId,
            body: &str,
        ) -> Result<Comment> {
            let mut comments = self.comments.borrow_mut();
            let comment = comments
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| Error::Api {
                    status: 404,
                    message: format!("no comment {id}"),
                })?;
            comment.body = body.to_string();
            Ok(comment.clone())
        }

        fn list_attachments(
            &self,
            _review: &ReviewRef,
            _id: CommentId,
        ) -> Result<Vec<Attachment>> {
            Ok(vec![])
        }

        fn delete_attachment(
            &self,
            _review: &ReviewRef,
            _id: CommentId,
            _attachment: AttachmentId,
        ) -> Result<()> {
            Ok(())
        }

        fn create_attachment(
            &self,
            _review: &ReviewRef,
            _id: CommentId,
            name: &str,
            _content: Vec<u8>,
        ) -> Result<Attachment> {
            Ok(Attachment {
                id: AttachmentId(1),
                name: name.to_string(),
            })
        }
    }

    fn review() -> ReviewRef {
        ReviewRef::from_repository("acme/widgets", 1).unwrap()
    }

    #[test]
    fn test_upsert_creates_on_empty_review() {
        let fake = FakeReview::default();
        let comment = upsert_comment(&fake, &review(), "hi").unwrap();

        assert_eq!(comment.body, format!("{COMMENT_MARKER}\nhi"));
        assert_eq!(fake.bodies(), vec![format!("{COMMENT_MARKER}\nhi")]);
    }

    #[test]
    fn test_upsert_twice_updates_in_place() {
        let fake = FakeReview::default();
        let first = upsert_comment(&fake, &review(), "B1").unwrap();
        let second = upsert_comment(&fake, &review(), "B2").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(fake.bodies(), vec![format!("{COMMENT_MARKER}\nB2")]);
    }

    #[test]
    fn test_upsert_ignores_unmanaged_comments() {
        let fake = FakeReview::with_comments(&["LGTM", "needs rework"]);
        upsert_comment(&fake, &review(), "status").unwrap();

        assert_eq!(
            fake.bodies(),
            vec![
                "LGTM".to_string(),
                "needs rework".to_string(),
                format!("{COMMENT_MARKER}\nstatus"),
            ]
        );
    }

    #[test]
    fn test_upsert_replaces_whole_body() {
        let marked = format!("{COMMENT_MARKER}\nold line one\nold line two");
        let fake = FakeReview::with_comments(&["unrelated", &marked]);
        upsert_comment(&fake, &review(), "fresh").unwrap();

        assert_eq!(
            fake.bodies(),
            vec!["unrelated".to_string(), format!("{COMMENT_MARKER}\nfresh")]
        );
    }

    #[test]
    fn test_marker_detected_anywhere_in_body() {
        // Containment check, not prefix check: the marker may have drifted
        // below other text in a hand-edited comment.
        let drifted = format!("edited by hand\n{COMMENT_MARKER}\nrest");
        let fake = FakeReview::with_comments(&[&drifted]);
        let comment = upsert_comment(&fake, &review(), "new").unwrap();

        assert_eq!(comment.id, CommentId(1));
        assert_eq!(fake.bodies(), vec![format!("{COMMENT_MARKER}\nnew")]);
    }

    #[test]
    fn test_first_marked_comment_wins() {
        let a = format!("{COMMENT_MARKER}\nA");
        let b = format!("{COMMENT_MARKER}\nB");
        let fake = FakeReview::with_comments(&[&a, &b]);
        let comment = upsert_comment(&fake, &review(), "C").unwrap();

        assert_eq!(comment.id, CommentId(1));
        // The second marked comment is left alone.
        assert_eq!(
            fake.bodies(),
            vec![format!("{COMMENT_MARKER}\nC"), b.clone()]
        );
    }

    #[test]
    fn test_create_comment_posts_unmarked_body() {
        let fake = FakeReview::default();
        let comment = create_comment(&fake, &review(), "raw body").unwrap();

        assert_eq!(comment.body, "raw body");
        assert!(!comment.body.contains(COMMENT_MARKER));
    }
}
