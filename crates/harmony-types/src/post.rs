//! Post documents of the posts collection.
//!
//! A post is either top-level or a reply to another post. Field names follow
//! the document store (`$id`, `userId`, `parentId`, `$createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Assigns a topic label to new post content.
///
/// Called exactly once per post, at creation time.
pub trait TopicAssigner {
    /// Return the topic label for the given content and optional title.
    fn assign_topic(&self, content: &str, title: Option<&str>) -> String;
}

/// A post submitted by a user, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Author user id
    pub user_id: String,

    /// Post body
    pub content: String,

    /// Optional title (shared article title, for instance)
    #[serde(default)]
    pub title: Option<String>,

    /// Parent post id when this post is a reply
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Shared article URL
    #[serde(default)]
    pub article: Option<String>,
}

impl NewPost {
    /// Create a new top-level post.
    pub fn new(user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            content: content.into(),
            title: None,
            parent_id: None,
            article: None,
        }
    }

    /// Attach a title used when classifying the post.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Turn the post into a reply to `parent_id`.
    pub fn reply_to(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Attach a shared article URL.
    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }
}

/// A stored post document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Document id (ULID string for posts created here)
    #[serde(rename = "$id", alias = "id", default)]
    pub id: String,

    /// Author user id
    #[serde(default)]
    pub user_id: Option<String>,

    /// Post body; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Topic assigned at creation
    #[serde(default)]
    pub topic: Option<String>,

    /// Parent post id when this post is a reply
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Parent relationship as exposed by older documents. Holds the parent id
    /// when one is known, or [`UNKNOWN_PARENT`] for any other non-empty value.
    #[serde(
        default,
        deserialize_with = "parent_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,

    /// Shared article URL
    #[serde(default)]
    pub article: Option<String>,

    /// Creation timestamp
    #[serde(rename = "$createdAt", alias = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Store a new post, assigning its topic once.
    ///
    /// The topic is computed from the content (and title, if any) and never
    /// recomputed afterward.
    pub fn create<A>(new_post: NewPost, assigner: &A, now: DateTime<Utc>) -> Self
    where
        A: TopicAssigner + ?Sized,
    {
        let topic = assigner.assign_topic(&new_post.content, new_post.title.as_deref());
        let id = ulid::Ulid::from_parts(now.timestamp_millis() as u64, rand::random()).to_string();

        Self {
            id,
            user_id: Some(new_post.user_id),
            content: new_post.content,
            topic: Some(topic),
            parent_id: new_post.parent_id,
            parent: None,
            article: new_post.article,
            created_at: Some(now),
        }
    }

    /// Topic label, or `None` when absent or empty.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    /// Parent post id, or `None` for a top-level post.
    pub fn parent(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.parent.as_deref().filter(|p| !p.is_empty()))
    }

    /// Whether this post is a reply to another post.
    pub fn is_reply(&self) -> bool {
        self.parent().is_some()
    }
}

/// Marker for a parent reference that carries no readable id.
pub const UNKNOWN_PARENT: &str = "(unknown)";

/// Read a nullable string field as an empty string when `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any parent reference; only `null`, `""`, `false` and `0` mean no parent.
fn parent_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(id)) if id.is_empty() => None,
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Object(doc)) => Some(
            doc.get("$id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .unwrap_or(UNKNOWN_PARENT)
                .to_string(),
        ),
        Some(_) => Some(UNKNOWN_PARENT.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedTopic(&'static str);

    impl TopicAssigner for FixedTopic {
        fn assign_topic(&self, _content: &str, _title: Option<&str>) -> String {
            self.0.to_string()
        }
    }

    struct TitleEcho;

    impl TopicAssigner for TitleEcho {
        fn assign_topic(&self, _content: &str, title: Option<&str>) -> String {
            title.unwrap_or("none").to_string()
        }
    }

    #[test]
    fn test_create_assigns_topic_and_id() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let post = Post::create(
            NewPost::new("u1", "hello").with_article("https://example.com/a"),
            &FixedTopic("Social"),
            now,
        );

        assert_eq!(post.topic(), Some("Social"));
        assert_eq!(post.user_id.as_deref(), Some("u1"));
        assert_eq!(post.article.as_deref(), Some("https://example.com/a"));
        assert_eq!(post.created_at, Some(now));
        assert_eq!(post.id.len(), 26);
        assert!(!post.is_reply());
    }

    #[test]
    fn test_create_passes_title_to_assigner() {
        let post = Post::create(
            NewPost::new("u1", "body").with_title("Headline"),
            &TitleEcho,
            Utc::now(),
        );
        assert_eq!(post.topic(), Some("Headline"));
    }

    #[test]
    fn test_create_reply() {
        let post = Post::create(
            NewPost::new("u1", "agreed").reply_to("p1"),
            &FixedTopic("General"),
            Utc::now(),
        );
        assert!(post.is_reply());
        assert_eq!(post.parent(), Some("p1"));
    }

    #[test]
    fn test_create_ids_are_unique() {
        let now = Utc::now();
        let a = Post::create(NewPost::new("u1", "a"), &FixedTopic("General"), now);
        let b = Post::create(NewPost::new("u1", "b"), &FixedTopic("General"), now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_deserialize_store_document() {
        let json = r#"{
            "$id": "p2",
            "userId": "u9",
            "content": "Nice post",
            "topic": "Technology",
            "parentId": "p1",
            "article": "",
            "$createdAt": "2024-05-01T10:00:00.000+00:00"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "p2");
        assert_eq!(post.topic(), Some("Technology"));
        assert_eq!(post.parent(), Some("p1"));
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let json = r#"{"$id": "p1", "content": "x", "topic": "", "parentId": ""}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.topic(), None);
        assert!(!post.is_reply());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let json = r#"{"$id": "p1", "content": "x", "topic": null, "parentId": null}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.topic(), None);
        assert!(!post.is_reply());
    }

    #[test]
    fn test_embedded_parent_document() {
        let json = r#"{"$id": "c1", "content": "x", "parent": {"$id": "p7", "content": "root"}}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.parent(), Some("p7"));
        assert!(post.is_reply());
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let json = r#"{"$id": "p1", "content": null, "topic": "News"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.content, "");
        assert_eq!(post.topic(), Some("News"));
    }

    fn parent_of(parent_json: &str) -> Option<String> {
        let json = format!(r#"{{"$id": "c1", "content": "x", "parent": {}}}"#, parent_json);
        let post: Post = serde_json::from_str(&json).unwrap();
        post.parent().map(str::to_string)
    }

    #[test]
    fn test_truthy_parent_shapes_are_replies() {
        assert_eq!(parent_of(r#"{"content": "root"}"#).as_deref(), Some(UNKNOWN_PARENT));
        assert_eq!(parent_of(r#"{"$id": ""}"#).as_deref(), Some(UNKNOWN_PARENT));
        assert_eq!(parent_of("{}").as_deref(), Some(UNKNOWN_PARENT));
        assert_eq!(parent_of(r#"["p1"]"#).as_deref(), Some(UNKNOWN_PARENT));
        assert_eq!(parent_of("[]").as_deref(), Some(UNKNOWN_PARENT));
        assert_eq!(parent_of("true").as_deref(), Some(UNKNOWN_PARENT));
        assert_eq!(parent_of("42").as_deref(), Some("42"));
    }

    #[test]
    fn test_falsy_parent_shapes_are_top_level() {
        for falsy in ["null", r#""""#, "false", "0", "0.0"] {
            assert_eq!(parent_of(falsy), None, "parent: {falsy}");
        }
    }

    #[test]
    fn test_parent_id_string_alias() {
        let json = r#"{"id": "c1", "content": "x", "parent": "p3"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "c1");
        assert_eq!(post.parent(), Some("p3"));
    }
}
