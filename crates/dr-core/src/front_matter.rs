//! Front-matter extraction for comment source files
//!
//! A comment file may start with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! attachments:
//!   - path/to/file1
//!   - path/to/file2
//! ---
//! remaining markdown body...
//! ```
//!
//! Only the `attachments` key is recognized; unknown keys are ignored.
//! Malformed or absent front matter never fails: it degrades to an empty
//! [`FrontMatter`] with the source text returned untouched.

use serde::Deserialize;
use tracing::{error, info};

/// Recognized front-matter directives of a comment file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    /// Paths of files to attach to the comment, relative to the
    /// invocation working directory
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl FrontMatter {
    /// Whether the front matter carries any directives
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

/// Split a comment source into its front matter and body.
///
/// Returns the parsed front matter and the body with the front-matter block
/// removed. If no front matter is found, or the YAML payload fails to parse,
/// the original `source` is returned unchanged alongside an empty
/// [`FrontMatter`].
pub fn parse(source: &str) -> (FrontMatter, String) {
    let stripped = source.trim();

    if stripped.starts_with("---") {
        let segments: Vec<&str> = stripped.splitn(3, "---").collect();
        if segments.len() == 3 {
            // An empty payload between the two delimiters parses to YAML
            // null, which is equivalent to "no directives".
            match serde_yaml::from_str::<Option<FrontMatter>>(segments[1]) {
                Ok(front_matter) => {
                    let body = segments[2].trim_start().to_string();
                    return (front_matter.unwrap_or_default(), body);
                }
                Err(e) => {
                    // The block was found, it just failed to parse; this is
                    // not the "no front matter" case.
                    error!("Failed to parse front matter: {e}");
                    return (FrontMatter::default(), source.to_string());
                }
            }
        }
    }

    info!("No front matter found in comment body.");
    (FrontMatter::default(), source.to_string())
}
