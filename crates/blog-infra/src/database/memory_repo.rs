//! In-memory post repository - used when no MongoDB URI is configured.
//!
//! Keeps documents in insertion order and generates real `ObjectId`s, so
//! identifiers behave exactly as they do against MongoDB.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::StreamExt;
use futures::stream;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, PostStream};

use super::document::{NewPostDocument, PostDocument};
use super::object_id::string_to_id;

pub struct InMemoryPostRepository {
    store: RwLock<Vec<PostDocument>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn position(docs: &[PostDocument], id: &ObjectId) -> Option<usize> {
    docs.iter().position(|d| &d.id == id)
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let doc = NewPostDocument::from(post).with_id(ObjectId::new());
        tracing::debug!(post_id = %doc.id, "Inserting post");

        let mut store = self.store.write().await;
        store.push(doc.clone());

        Ok(doc.into())
    }

    async fn list(&self) -> Result<PostStream, RepoError> {
        let snapshot = self.store.read().await.clone();
        Ok(stream::iter(snapshot.into_iter().map(|doc| Ok(Post::from(doc)))).boxed())
    }

    async fn get(&self, id: &str) -> Result<Post, RepoError> {
        let oid = string_to_id(id)?;

        let store = self.store.read().await;
        position(&store, &oid)
            .map(|i| store[i].clone().into())
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: &str, patch: PostUpdate) -> Result<Post, RepoError> {
        let oid = string_to_id(id)?;
        tracing::debug!(post_id = %oid, "Updating post");

        let mut store = self.store.write().await;
        let i = position(&store, &oid).ok_or(RepoError::NotFound)?;
        store[i].apply(&patch);

        Ok(store[i].clone().into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let oid = string_to_id(id)?;
        tracing::debug!(post_id = %oid, "Deleting post");

        let mut store = self.store.write().await;
        let i = position(&store, &oid).ok_or(RepoError::NotFound)?;
        store.remove(i);

        Ok(())
    }
}
