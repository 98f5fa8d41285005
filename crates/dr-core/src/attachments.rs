//! Attachment synchronization
//!
//! Reconciles a comment's attachment set against a desired list of local
//! files by full replacement: every existing attachment is deleted before
//! any new file is uploaded. There is no diffing and no rollback; a failed
//! upload leaves the set partially replaced.

use crate::error::{Error, Result};
use crate::review::{ReviewApi, ReviewRef};
use crate::types::CommentId;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Replace the comment's attachments with the files at `paths`, in order.
///
/// Each path is read in full and released before the next upload starts. A
/// server-side (5xx) rejection of an upload maps to
/// [`Error::AttachmentRejected`] and stops the sync immediately; files after
/// the failing one are not attempted. Other failures propagate unchanged.
pub fn sync_attachments(
    api: &dyn ReviewApi,
    review: &ReviewRef,
    id: CommentId,
    paths: &[String],
) -> Result<()> {
    let existing = api.list_attachments(review, id)?;
    for attachment in existing {
        debug!("Deleting attachment {} ({})", attachment.id, attachment.name);
        api.delete_attachment(review, id, attachment.id)?;
    }

    for path in paths {
        let content = read_attachment(Path::new(path))?;
        let name = attachment_name(path);
        info!("Uploading attachment {path}");
        match api.create_attachment(review, id, name, content) {
            Ok(_) => {}
            Err(Error::Api { status, .. }) if status >= 500 => {
                return Err(Error::AttachmentRejected {
                    name: path.clone(),
                    status,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn read_attachment(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })
}

/// The name the Hub stores for an uploaded file: its final path component.
fn attachment_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}
