//! post-dr-comment - Post a comment to an AllSpice Hub Design Review
//!
//! Posts or updates a single status comment on a Design Review, identified
//! idempotently by a hidden marker, and syncs the attachments declared in
//! the comment file's front matter.
//!
//! ## Quick Start
//!
//! ```bash
//! export ALLSPICE_AUTH_TOKEN=...
//! post-dr-comment \
//!     --repository acme/widgets \
//!     --design-review-number 12 \
//!     --comment-path status.md
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
