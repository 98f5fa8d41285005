//! CLI argument parsing and dispatch

pub mod post;

use clap::Parser;
use std::path::PathBuf;

/// post-dr-comment - Post a comment to an AllSpice Hub Design Review
#[derive(Debug, Parser)]
#[command(name = "post-dr-comment")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The URL of the AllSpice Hub instance to post the comment to
    #[arg(long, default_value = "https://hub.allspice.io")]
    pub hub_url: String,

    /// The repository the design review is associated with, as owner/repo
    #[arg(long)]
    pub repository: String,

    /// The number of the design review to post the comment to
    #[arg(long)]
    pub design_review_number: u64,

    /// The path to the comment Markdown file
    #[arg(long)]
    pub comment_path: PathBuf,

    /// Whether to reuse an existing comment if it exists
    #[arg(
        long,
        default_value = "true",
        value_parser = parse_bool,
        action = clap::ArgAction::Set,
        num_args = 1
    )]
    pub reuse_existing_comment: bool,

    /// The logging level to use
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Hub access token
    #[arg(long, env = "ALLSPICE_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: String,
}

/// Parse a YAML-like boolean string as a boolean.
fn parse_bool(input: &str) -> Result<bool, String> {
    match input.to_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err("One of: yes, no, true, false, t, f, y, n, 1, 0 expected.".to_string()),
    }
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_level);

    post::execute(cli)
}

fn setup_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level.to_lowercase())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
