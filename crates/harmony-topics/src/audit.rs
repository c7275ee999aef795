//! Stored-topic audit.
//!
//! Topics are assigned once when a post is created. After keyword or weight
//! changes, stored labels may disagree with what the classifier would assign
//! today. This module reports those posts; it never rewrites them.

use serde::Serialize;
use tracing::info;

use harmony_types::Post;

use crate::classifier::Classifier;

/// A post whose stored topic differs from the current classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleTopic {
    /// Post id
    pub post_id: String,
    /// Stored label, if any
    pub stored: Option<String>,
    /// Label the classifier assigns now
    pub current: String,
}

/// Find posts whose stored topic no longer matches `classifier`.
///
/// Labels are compared case-insensitively, matching how topics are grouped
/// for ranking. Posts without a stored topic are always reported.
pub fn find_stale_topics<'a, I>(posts: I, classifier: &Classifier) -> Vec<StaleTopic>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut checked = 0usize;
    let stale: Vec<StaleTopic> = posts
        .into_iter()
        .inspect(|_| checked += 1)
        .filter_map(|post| {
            let current = classifier.classify(&post.content, None);
            match post.topic() {
                Some(stored) if stored.eq_ignore_ascii_case(current) => None,
                stored => Some(StaleTopic {
                    post_id: post.id.clone(),
                    stored: stored.map(str::to_string),
                    current: current.to_string(),
                }),
            }
        })
        .collect();

    info!(checked, stale = stale.len(), "Audited stored topics");
    stale
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmony_types::ScoringWeights;

    fn post(id: &str, content: &str, topic: Option<&str>) -> Post {
        Post {
            id: id.to_string(),
            user_id: None,
            content: content.to_string(),
            topic: topic.map(str::to_string),
            parent_id: None,
            parent: None,
            article: None,
            created_at: None,
        }
    }

    #[test]
    fn test_matching_topics_not_reported() {
        let posts = vec![
            post("p1", "looking for a job", Some("Career")),
            post("p2", "looking for a job", Some("career")),
            post("p3", "lorem ipsum", Some("General")),
        ];
        assert!(find_stale_topics(&posts, &Classifier::default()).is_empty());
    }

    #[test]
    fn test_mismatch_and_missing_reported() {
        let posts = vec![
            post("p1", "new programming language", Some("News")),
            post("p2", "travel photos", None),
        ];
        let stale = find_stale_topics(&posts, &Classifier::default());
        assert_eq!(
            stale,
            vec![
                StaleTopic {
                    post_id: "p1".to_string(),
                    stored: Some("News".to_string()),
                    current: "Technology".to_string(),
                },
                StaleTopic {
                    post_id: "p2".to_string(),
                    stored: None,
                    current: "Lifestyle".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_weight_change_makes_labels_stale() {
        let classifier = Classifier::default();
        let created = Post::create(
            harmony_types::NewPost::new("u1", "web job"),
            &classifier,
            chrono::Utc::now(),
        );
        assert_eq!(created.topic(), Some("Career"));

        let reweighted = Classifier::new(ScoringWeights {
            content_secondary: 5.0,
            ..Default::default()
        });
        let stale = find_stale_topics([&created], &reweighted);
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].current, "Technology");
        // The stored label is untouched
        assert_eq!(created.topic(), Some("Career"));
    }
}
