//! Topic popularity ranking.
//!
//! Folds a batch of posts into per-topic engagement statistics. Topics are
//! grouped case-insensitively; the displayed name is the longest original
//! spelling seen, with equal lengths keeping the first one seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use harmony_types::{EngagementWeights, Post};

use crate::error::TopicsError;

/// Engagement statistics for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStat {
    /// Display name
    pub name: String,
    /// Number of top-level posts
    pub post_count: u32,
    /// Number of replies
    pub comment_count: u32,
    /// Weighted engagement score
    pub total_engagement: f64,
    /// `post_count + comment_count`
    pub count: u32,
}

impl TopicStat {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            post_count: 0,
            comment_count: 0,
            total_engagement: 0.0,
            count: 0,
        }
    }
}

/// Ranks topics by weighted engagement.
///
/// # Example
/// ```
/// use harmony_topics::TopicAggregator;
/// use harmony_types::Post;
///
/// let posts: Vec<Post> = serde_json::from_str(r#"[
///     {"$id": "p1", "content": "", "topic": "Tech"},
///     {"$id": "c1", "content": "", "topic": "tech", "parentId": "p1"}
/// ]"#).unwrap();
///
/// let stats = TopicAggregator::default().rank(&posts);
/// assert_eq!(stats.len(), 1);
/// assert_eq!(stats[0].name, "Tech");
/// assert_eq!(stats[0].count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TopicAggregator {
    weights: EngagementWeights,
}

impl TopicAggregator {
    /// Create an aggregator with the given engagement weights.
    pub fn new(weights: EngagementWeights) -> Self {
        Self { weights }
    }

    /// Create an aggregator, rejecting negative or non-finite weights.
    pub fn try_new(weights: EngagementWeights) -> Result<Self, TopicsError> {
        weights.validate().map_err(TopicsError::InvalidConfig)?;
        Ok(Self::new(weights))
    }

    /// Get the configured weights.
    pub fn weights(&self) -> &EngagementWeights {
        &self.weights
    }

    /// Fold `posts` into ranked topic statistics.
    ///
    /// Posts without a topic are skipped. The result is sorted by total
    /// engagement, then post count, both descending; full ties keep the
    /// order in which topics were first seen.
    pub fn rank<'a, I>(&self, posts: I) -> Vec<TopicStat>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut stats: Vec<TopicStat> = Vec::new();
        let mut skipped = 0usize;

        for post in posts {
            let Some(topic) = post.topic() else {
                skipped += 1;
                continue;
            };

            let slot = *index.entry(topic.to_lowercase()).or_insert_with(|| {
                stats.push(TopicStat::new(topic));
                stats.len() - 1
            });
            let stat = &mut stats[slot];

            if topic.chars().count() > stat.name.chars().count() {
                stat.name = topic.to_string();
            }

            if post.is_reply() {
                stat.comment_count += 1;
                stat.total_engagement += self.weights.reply;
            } else {
                stat.post_count += 1;
                stat.total_engagement += self.weights.post;
            }
            stat.count = stat.post_count + stat.comment_count;
        }

        // sort_by is stable
        stats.sort_by(|a, b| {
            b.total_engagement
                .total_cmp(&a.total_engagement)
                .then_with(|| b.post_count.cmp(&a.post_count))
        });

        info!(topics = stats.len(), skipped, "Ranked topics by engagement");
        stats
    }

    /// Like [`rank`](Self::rank), keeping only the first `limit` topics.
    pub fn rank_top<'a, I>(&self, posts: I, limit: usize) -> Vec<TopicStat>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut stats = self.rank(posts);
        stats.truncate(limit);
        stats
    }
}

impl Default for TopicAggregator {
    fn default() -> Self {
        Self::new(EngagementWeights::default())
    }
}
