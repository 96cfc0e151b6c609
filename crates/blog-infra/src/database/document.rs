//! Stored document shapes and their conversion to domain types.

use bson::oid::ObjectId;
use bson::{DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};

use blog_core::domain::{NewPost, Post, PostUpdate};

use super::object_id::id_to_string;

/// Name of the single collection this service owns.
pub const POSTS_COLLECTION: &str = "posts";

/// A post as stored in the `posts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: BsonDateTime,
}

/// Insert shape - the store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPostDocument {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: BsonDateTime,
}

impl NewPostDocument {
    /// Attach the identifier the store assigned on insert.
    pub fn with_id(self, id: ObjectId) -> PostDocument {
        PostDocument {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

/// Timestamps are stored with millisecond precision.
impl From<NewPost> for NewPostDocument {
    fn from(post: NewPost) -> Self {
        Self {
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: BsonDateTime::from_chrono(post.created_at),
        }
    }
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: id_to_string(&doc.id),
            title: doc.title,
            content: doc.content,
            author: doc.author,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

impl PostDocument {
    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &PostUpdate) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        if let Some(author) = &patch.author {
            self.author.clone_from(author);
        }
    }
}

/// Build the body of a `$set` holding only the present fields of `patch`.
pub fn set_fields(patch: &PostUpdate) -> Document {
    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &patch.content {
        set.insert("content", content.as_str());
    }
    if let Some(author) = &patch.author {
        set.insert("author", author.as_str());
    }
    set
}
