use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Post entity - a blog post as seen by API consumers.
///
/// `id` is the store identifier rendered as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Raw creation input, as received from a client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 100, message = "title must be 1 to 100 characters"))]
    pub title: String,

    #[validate(length(min = 10, message = "content shorter than 10 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "author must be 1 to 50 characters"))]
    pub author: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreatePost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            created_at: None,
        }
    }
}

/// A validated creation payload, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update - only the fields that are present get overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostUpdate {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "title must be 1 to 100 characters"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(min = 10, message = "content shorter than 10 characters"))]
    pub content: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "author must be 1 to 50 characters"))]
    pub author: Option<String>,
}

impl PostUpdate {
    /// True when no field is present, i.e. applying it changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_with_no_fields_is_empty() {
        assert!(PostUpdate::default().is_empty());

        let update = PostUpdate {
            author: Some("someone".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn update_deserializes_missing_fields_as_absent() {
        let update: PostUpdate = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(update.title.as_deref(), Some("New"));
        assert!(update.content.is_none());
        assert!(update.author.is_none());
    }

    #[test]
    fn create_input_without_timestamp() {
        let input: CreatePost =
            serde_json::from_str(r#"{"title":"A","content":"0123456789","author":"B"}"#).unwrap();
        assert!(input.created_at.is_none());
    }
}
