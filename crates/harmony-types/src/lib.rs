//! # harmony-types
//!
//! Shared domain types for the Harmony social client.
//!
//! This crate defines the data structures exchanged with the document store
//! and the settings used by the topic subsystem:
//! - Posts: Documents of the posts collection (top-level posts and replies)
//! - Settings: Layered configuration (defaults, config file, env vars)
//!
//! ## Usage
//!
//! ```rust
//! use harmony_types::{NewPost, Post, TopicAssigner};
//! use chrono::Utc;
//!
//! struct Fixed;
//!
//! impl TopicAssigner for Fixed {
//!     fn assign_topic(&self, _content: &str, _title: Option<&str>) -> String {
//!         "Career".to_string()
//!     }
//! }
//!
//! let post = Post::create(NewPost::new("user-1", "Got the job!"), &Fixed, Utc::now());
//! assert_eq!(post.topic.as_deref(), Some("Career"));
//! ```

pub mod config;
pub mod error;
pub mod post;

pub use config::{EngagementWeights, ScoringWeights, Settings, TopicsConfig};
pub use error::HarmonyError;
pub use post::{NewPost, Post, TopicAssigner, UNKNOWN_PARENT};
