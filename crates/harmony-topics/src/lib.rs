//! # harmony-topics
//!
//! Topic classification and popularity ranking for Harmony posts.
//!
//! New posts get a topic label from a fixed keyword taxonomy when they are
//! created. Batches of stored posts are folded into per-topic engagement
//! statistics and ranked for the Topics page.
//!
//! ## Features
//! - Weighted keyword classifier over a fixed, ordered taxonomy
//! - Case-insensitive topic aggregation with engagement ranking
//! - Batch helpers: loading JSON exports, topic filters, recent posts
//! - Audit of stored labels against the current classifier

pub mod aggregator;
pub mod audit;
pub mod batch;
pub mod classifier;
pub mod error;
pub mod taxonomy;
pub mod text;

pub use aggregator::{TopicAggregator, TopicStat};
pub use audit::{find_stale_topics, StaleTopic};
pub use batch::{extract_content, load_posts, posts_by_topic, recent_posts, DEFAULT_RECENT_LIMIT};
pub use classifier::{Classifier, TopicScore};
pub use error::TopicsError;
pub use harmony_types::{EngagementWeights, ScoringWeights, TopicsConfig};
pub use taxonomy::{is_known_topic, TopicKeywords, GENERAL_TOPIC, TAXONOMY};
pub use text::normalize;
