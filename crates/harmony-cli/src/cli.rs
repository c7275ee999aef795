//! CLI argument parsing for the harmony tool.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand, ValueEnum};

/// Harmony topic tool
///
/// Classifies post content and ranks topics by engagement.
#[derive(Parser, Debug)]
#[command(name = "harmony")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/harmony/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Tool commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the topic assigned to post content
    Classify {
        /// Post content
        content: String,

        /// Optional title (weighted higher than content)
        #[arg(short, long)]
        title: Option<String>,

        /// Show the score of every topic
        #[arg(long)]
        explain: bool,
    },

    /// Rank topics by engagement across a batch of posts
    Rank {
        /// JSON file with post documents ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Maximum number of topics to show
        #[arg(short = 'n', long, conflicts_with = "top")]
        limit: Option<usize>,

        /// Show only the configured number of top topics
        #[arg(long)]
        top: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List posts from a batch
    Posts {
        /// JSON file with post documents ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Only posts with exactly this topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Newest N posts first (20 when given without a value)
        #[arg(long, num_args = 0..=1, default_missing_value = "20")]
        recent: Option<usize>,

        /// Print only the joined post content
        #[arg(long)]
        content_only: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Report posts whose stored topic differs from the current classifier
    Audit {
        /// JSON file with post documents ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
