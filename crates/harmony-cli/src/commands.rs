//! Command implementations for the harmony tool.
//!
//! Handles:
//! - classify: Score content against the topic taxonomy
//! - rank: Aggregate a post batch into ranked topic statistics
//! - posts: Filter a post batch by topic and recency
//! - audit: Compare stored topics with the current classifier

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use harmony_topics::{
    extract_content, find_stale_topics, load_posts, posts_by_topic, recent_posts, Classifier,
    StaleTopic, TopicAggregator, TopicScore, TopicStat,
};
use harmony_types::{Post, Settings};

use crate::cli::OutputFormat;

/// Maximum content characters shown per row in post tables.
const CONTENT_PREVIEW_CHARS: usize = 60;

/// Load settings and apply the CLI log level override.
pub fn load_settings(
    config_path: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    Ok(settings)
}

/// Install the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Read a post batch from a file, or from stdin when `input` is "-".
pub fn read_posts(input: &str) -> Result<Vec<Post>> {
    let posts = if input == "-" {
        debug!("Reading posts from stdin");
        load_posts(io::stdin().lock()).context("Failed to parse posts from stdin")?
    } else {
        let path = Path::new(input);
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        load_posts(BufReader::new(file)).with_context(|| format!("Failed to parse {:?}", path))?
    };

    info!("Loaded {} posts from {}", posts.len(), input);
    Ok(posts)
}

/// Classify content and print the topic (or every topic score).
pub fn handle_classify(
    settings: &Settings,
    content: &str,
    title: Option<&str>,
    explain: bool,
) -> Result<()> {
    let classifier = Classifier::try_new(settings.topics.scoring)?;
    let topic = classifier.classify(content, title);

    if explain {
        let scores = classifier.score_all(content, title);
        print!("{}", render_scores(&scores, topic));
    } else {
        println!("{}", topic);
    }
    Ok(())
}

/// Rank topics in a post batch and print them.
///
/// `top` limits the listing to the configured `topics.top_n`.
pub fn handle_rank(
    settings: &Settings,
    input: &str,
    limit: Option<usize>,
    top: bool,
    format: OutputFormat,
) -> Result<()> {
    let posts = read_posts(input)?;
    let aggregator = TopicAggregator::try_new(settings.topics.engagement)?;

    let limit = if top { Some(settings.topics.top_n) } else { limit };
    let stats = match limit {
        Some(n) => aggregator.rank_top(&posts, n),
        None => aggregator.rank(&posts),
    };

    print!("{}", render_stats(&stats, format)?);
    Ok(())
}

/// Print posts from a batch, filtered by topic and recency.
pub fn handle_posts(
    input: &str,
    topic: Option<&str>,
    recent: Option<usize>,
    content_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let posts = read_posts(input)?;

    let selected: Vec<&Post> = match (recent, topic) {
        (Some(limit), topic) => recent_posts(&posts, topic, limit),
        (None, Some(topic)) => posts_by_topic(&posts, topic),
        (None, None) => posts.iter().collect(),
    };

    if content_only {
        println!("{}", extract_content(selected));
    } else {
        print!("{}", render_posts(&selected, format)?);
    }
    Ok(())
}

/// Print posts whose stored topic is stale.
pub fn handle_audit(settings: &Settings, input: &str, format: OutputFormat) -> Result<()> {
    let posts = read_posts(input)?;
    let classifier = Classifier::try_new(settings.topics.scoring)?;
    let stale = find_stale_topics(&posts, &classifier);

    print!("{}", render_stale(&stale, posts.len(), format)?);
    Ok(())
}

/// Format per-topic classifier scores, marking the winning topic.
pub fn render_scores(scores: &[TopicScore], winner: &str) -> String {
    let mut out = String::new();
    for score in scores {
        let marker = if score.topic == winner { "*" } else { " " };
        out.push_str(&format!("{} {:<14} {:>5.1}\n", marker, score.topic, score.score));
    }
    out.push_str(&format!("Topic: {}\n", winner));
    out
}

/// Format ranked topic statistics.
pub fn render_stats(stats: &[TopicStat], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(stats);
    }

    if stats.is_empty() {
        return Ok("No topics found\n".to_string());
    }

    let mut out = format!(
        "{:<4} {:<20} {:>6} {:>8} {:>10} {:>6}\n",
        "#", "TOPIC", "POSTS", "REPLIES", "ENGAGEMENT", "TOTAL"
    );
    for (rank, stat) in stats.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<20} {:>6} {:>8} {:>10.1} {:>6}\n",
            rank + 1,
            stat.name,
            stat.post_count,
            stat.comment_count,
            stat.total_engagement,
            stat.count
        ));
    }
    Ok(out)
}

/// Format a list of posts.
fn render_posts(posts: &[&Post], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(posts);
    }

    if posts.is_empty() {
        return Ok("No posts found\n".to_string());
    }

    let mut out = String::new();
    for post in posts {
        let created = post
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let kind = if post.is_reply() { "reply" } else { "post" };
        out.push_str(&format!(
            "{:<28} {:<16} {:<14} {:<5} {}\n",
            post.id,
            created,
            post.topic().unwrap_or("-"),
            kind,
            preview(&post.content)
        ));
    }
    Ok(out)
}

/// Format audit results.
pub fn render_stale(stale: &[StaleTopic], checked: usize, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(stale);
    }

    let mut out = String::new();
    for entry in stale {
        out.push_str(&format!(
            "{:<28} {:<14} -> {}\n",
            entry.post_id,
            entry.stored.as_deref().unwrap_or("(none)"),
            entry.current
        ));
    }
    out.push_str(&format!("{} of {} posts have stale topics\n", stale.len(), checked));
    Ok(out)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// First line of `content`, shortened to the preview width.
fn preview(content: &str) -> String {
    let line = content.lines().next().unwrap_or("");
    if line.chars().count() <= CONTENT_PREVIEW_CHARS {
        return line.to_string();
    }
    let mut short: String = line.chars().take(CONTENT_PREVIEW_CHARS - 3).collect();
    short.push_str("...");
    short
}
