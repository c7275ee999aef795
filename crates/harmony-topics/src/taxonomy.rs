//! Fixed topic taxonomy.
//!
//! Declaration order is the classifier's iteration order and decides ties.

/// Label returned when no taxonomy topic scores above zero.
pub const GENERAL_TOPIC: &str = "General";

/// Keywords for one taxonomy topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicKeywords {
    /// Display name of the topic
    pub name: &'static str,
    /// High-weight keywords
    pub primary: &'static [&'static str],
    /// Low-weight keywords
    pub secondary: &'static [&'static str],
}

/// The topic taxonomy, in tie-breaking order.
pub const TAXONOMY: &[TopicKeywords] = &[
    TopicKeywords {
        name: "Technology",
        primary: &["code", "programming", "software", "tech", "computer", "developer"],
        secondary: &["app", "web", "digital", "online", "internet", "mobile"],
    },
    TopicKeywords {
        name: "Career",
        primary: &["job", "career", "hiring", "salary", "interview"],
        secondary: &["work", "resume", "professional", "skills", "experience"],
    },
    TopicKeywords {
        name: "Education",
        primary: &["learning", "study", "school", "university", "course"],
        secondary: &["teach", "student", "education", "knowledge", "academic"],
    },
    TopicKeywords {
        name: "Lifestyle",
        primary: &["health", "fitness", "food", "travel", "life"],
        secondary: &["hobby", "family", "home", "personal", "wellness"],
    },
    TopicKeywords {
        name: "Entertainment",
        primary: &["movie", "music", "game", "show", "art"],
        secondary: &["book", "sport", "fun", "play", "watch"],
    },
    TopicKeywords {
        name: "Business",
        primary: &["startup", "business", "entrepreneur", "company"],
        secondary: &["market", "product", "service", "industry", "client"],
    },
    TopicKeywords {
        name: "Social",
        primary: &["community", "social", "friend", "network"],
        secondary: &["relationship", "people", "group", "connect", "share"],
    },
    TopicKeywords {
        name: "News",
        primary: &["news", "announcement", "update", "launch"],
        secondary: &["event", "release", "latest", "current", "today"],
    },
    TopicKeywords {
        name: "Question",
        primary: &["help", "question", "how", "what", "why"],
        secondary: &["when", "where", "need", "advice", "solution"],
    },
    TopicKeywords {
        name: "Discussion",
        primary: &["discuss", "opinion", "thought", "debate"],
        secondary: &["perspective", "view", "idea", "feedback", "comment"],
    },
];

/// Whether `name` is a label the classifier can produce.
pub fn is_known_topic(name: &str) -> bool {
    name == GENERAL_TOPIC || TAXONOMY.iter().any(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_taxonomy_order() {
        let names: Vec<&str> = TAXONOMY.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "Technology",
                "Career",
                "Education",
                "Lifestyle",
                "Entertainment",
                "Business",
                "Social",
                "News",
                "Question",
                "Discussion",
            ]
        );
    }

    #[test]
    fn test_topic_names_unique() {
        let names: HashSet<&str> = TAXONOMY.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TAXONOMY.len());
        assert!(!names.contains(GENERAL_TOPIC));
    }

    #[test]
    fn test_keywords_are_normalized() {
        // Keywords are matched against normalized text, so they must survive normalization.
        for topic in TAXONOMY {
            for keyword in topic.primary.iter().chain(topic.secondary) {
                assert_eq!(crate::text::normalize(keyword), *keyword);
            }
        }
    }

    #[test]
    fn test_is_known_topic() {
        assert!(is_known_topic("General"));
        assert!(is_known_topic("Career"));
        assert!(!is_known_topic("career"));
        assert!(!is_known_topic("Sports"));
    }
}
