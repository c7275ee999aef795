//! Harmony topic tool
//!
//! Classifies post content and ranks topics by engagement.
//!
//! # Usage
//!
//! ```bash
//! harmony classify "Looking for a rust job" [--title TITLE] [--explain]
//! harmony rank --input posts.json [--limit N | --top] [--format json]
//! harmony posts --input posts.json --topic Career [--recent 20] [--content-only]
//! harmony audit --input posts.json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/harmony/config.toml)
//! 3. Environment variables (HARMONY_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use harmony_cli::{
    handle_audit, handle_classify, handle_posts, handle_rank, init_logging, load_settings, Cli,
    Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref(), cli.log_level.as_deref())?;
    init_logging(&settings.log_level)?;

    match cli.command {
        Commands::Classify {
            content,
            title,
            explain,
        } => {
            handle_classify(&settings, &content, title.as_deref(), explain)?;
        }
        Commands::Rank {
            input,
            limit,
            top,
            format,
        } => {
            handle_rank(&settings, &input, limit, top, format)?;
        }
        Commands::Posts {
            input,
            topic,
            recent,
            content_only,
            format,
        } => {
            handle_posts(&input, topic.as_deref(), recent, content_only, format)?;
        }
        Commands::Audit { input, format } => {
            handle_audit(&settings, &input, format)?;
        }
    }

    Ok(())
}
