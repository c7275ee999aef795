//! Keyword-scoring topic classifier.
//!
//! Scores every taxonomy topic against the normalized content and title and
//! returns the best-scoring topic, falling back to "General".

use tracing::debug;

use harmony_types::{ScoringWeights, TopicAssigner};

use crate::error::TopicsError;
use crate::taxonomy::{TopicKeywords, GENERAL_TOPIC, TAXONOMY};
use crate::text::normalize;

/// Score of one taxonomy topic for a given input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicScore {
    /// Topic name
    pub topic: &'static str,
    /// Aggregate keyword score
    pub score: f64,
}

/// Deterministic keyword classifier.
///
/// Each keyword is tested once per field for presence as a substring of the
/// normalized text; repeated occurrences do not add up.
///
/// # Example
/// ```
/// use harmony_topics::Classifier;
///
/// let classifier = Classifier::default();
/// assert_eq!(classifier.classify("Looking for a new job", None), "Career");
/// assert_eq!(classifier.classify("lorem ipsum", None), "General");
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    weights: ScoringWeights,
}

impl Classifier {
    /// Create a classifier with the given keyword weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Create a classifier, rejecting negative or non-finite weights.
    pub fn try_new(weights: ScoringWeights) -> Result<Self, TopicsError> {
        weights.validate().map_err(TopicsError::InvalidConfig)?;
        Ok(Self::new(weights))
    }

    /// Get the configured weights.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Return the topic label for `content` and optional `title`.
    ///
    /// A topic must score strictly higher than the current best to win, so
    /// ties keep the topic declared first and zero scores yield "General".
    pub fn classify(&self, content: &str, title: Option<&str>) -> &'static str {
        let scores = self.score_all(content, title);

        let (best, best_score) = scores
            .iter()
            .fold((GENERAL_TOPIC, 0.0), |(best, best_score), s| {
                if s.score > best_score {
                    (s.topic, s.score)
                } else {
                    (best, best_score)
                }
            });

        debug!(topic = best, score = best_score, "Classified post content");
        best
    }

    /// Score every taxonomy topic, in taxonomy order.
    pub fn score_all(&self, content: &str, title: Option<&str>) -> Vec<TopicScore> {
        let content = normalize(content);
        let title = title.map(normalize).unwrap_or_default();

        TAXONOMY
            .iter()
            .map(|topic| TopicScore {
                topic: topic.name,
                score: self.score_topic(topic, &content, &title),
            })
            .collect()
    }

    fn score_topic(&self, topic: &TopicKeywords, content: &str, title: &str) -> f64 {
        let mut score = 0.0;

        if !title.is_empty() {
            score += hits(topic.primary, title) * self.weights.title_primary;
            score += hits(topic.secondary, title) * self.weights.title_secondary;
        }

        score += hits(topic.primary, content) * self.weights.content_primary;
        score += hits(topic.secondary, content) * self.weights.content_secondary;
        score
    }
}

/// Number of keywords present in `text`.
fn hits(keywords: &[&str], text: &str) -> f64 {
    keywords.iter().filter(|k| text.contains(*k)).count() as f64
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl TopicAssigner for Classifier {
    fn assign_topic(&self, content: &str, title: Option<&str>) -> String {
        self.classify(content, title).to_string()
    }
}
