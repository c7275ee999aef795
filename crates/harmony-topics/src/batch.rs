//! Post batch helpers.
//!
//! Loading JSON exports of the posts collection and the simple queries the
//! feed pages run over them.

use std::io::Read;

use serde_json::Value;
use tracing::{debug, warn};

use harmony_types::Post;

use crate::error::TopicsError;

/// Number of posts returned by [`recent_posts`] when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Load a batch of posts from JSON.
///
/// Accepts either a bare array of post documents or a list response of the
/// form `{ "total": .., "documents": [..] }`. Documents that fail to parse
/// are logged and skipped.
pub fn load_posts<R: Read>(reader: R) -> Result<Vec<Post>, TopicsError> {
    let value: Value = serde_json::from_reader(reader)?;

    let documents = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("documents") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(TopicsError::InvalidInput(
                    "expected an array of posts or an object with a `documents` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(TopicsError::InvalidInput(
                "expected an array of posts".to_string(),
            ))
        }
    };

    let total = documents.len();
    let posts: Vec<Post> = documents
        .into_iter()
        .enumerate()
        .filter_map(|(i, doc)| match serde_json::from_value::<Post>(doc) {
            Ok(post) => Some(post),
            Err(e) => {
                warn!(index = i, error = %e, "Skipping malformed post document");
                None
            }
        })
        .collect();

    debug!(total, loaded = posts.len(), "Loaded post batch");
    Ok(posts)
}

/// Posts whose topic equals `topic` exactly.
pub fn posts_by_topic<'a>(posts: &'a [Post], topic: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.topic() == Some(topic))
        .collect()
}

/// Newest posts first, optionally restricted to one topic.
///
/// Posts without a creation time sort last, keeping their batch order.
pub fn recent_posts<'a>(posts: &'a [Post], topic: Option<&str>, limit: usize) -> Vec<&'a Post> {
    let mut selected: Vec<&Post> = match topic {
        Some(topic) => posts_by_topic(posts, topic),
        None => posts.iter().collect(),
    };

    // None < Some, so comparing b to a puts undated posts last
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected.truncate(limit);
    selected
}

/// Join the content of `posts` with single spaces.
pub fn extract_content<'a, I>(posts: I) -> String
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .map(|p| p.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
