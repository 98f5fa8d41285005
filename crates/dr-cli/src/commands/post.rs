//! Post command
//!
//! Drives the full flow: read the comment file, extract front matter,
//! upsert the managed comment, then sync its attachments.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use tracing::{debug, error, info};

use dr_client::HubClient;
use dr_core::attachments::sync_attachments;
use dr_core::front_matter;
use dr_core::review::{ReviewApi, ReviewRef};
use dr_core::upsert::{create_comment, upsert_comment};

use super::Cli;

/// Execute the post command
pub fn execute(args: Cli) -> Result<()> {
    let review = ReviewRef::from_repository(&args.repository, args.design_review_number)?;
    let client = HubClient::new(&args.hub_url, &args.auth_token)?;

    let source = fs::read_to_string(&args.comment_path).context(format!(
        "Failed to read comment file {}",
        args.comment_path.display()
    ))?;

    let (front_matter, body) = front_matter::parse(&source);
    if !front_matter.is_empty() {
        debug!("Front matter: {front_matter:?}");
    }

    let comment = if args.reuse_existing_comment {
        upsert_comment(&client, &review, &body)?
    } else {
        create_comment(&client, &review, &body)?
    };

    if !front_matter.attachments.is_empty() {
        sync(&client, &review, &comment, &front_matter.attachments)?;
    }

    info!("Comment posted successfully.");
    eprintln!(
        "{} Posted comment {} on {}",
        "✓".green(),
        comment.id.to_string().cyan(),
        review.to_string().cyan()
    );

    Ok(())
}

fn sync(
    client: &dyn ReviewApi,
    review: &ReviewRef,
    comment: &dr_core::review::Comment,
    attachments: &[String],
) -> Result<()> {
    sync_attachments(client, review, comment.id, attachments).map_err(|e| {
        if e.is_attachment_rejected() {
            error!(
                "{e}. The file may be too large, or it may be of a file type \
                 that is not supported by the AllSpice Hub."
            );
        }
        e.into()
    })
}
