//! Harmony command-line library exports.
//!
//! This crate provides the `harmony` binary for classifying post content and
//! ranking topics over JSON exports of the posts collection.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (classify, rank, posts, audit)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::{
    handle_audit, handle_classify, handle_posts, handle_rank, init_logging, load_settings,
    read_posts, render_scores, render_stale, render_stats,
};
