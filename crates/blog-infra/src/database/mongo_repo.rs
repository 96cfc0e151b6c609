//! MongoDB repository implementation.

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures::StreamExt;
use mongodb::Collection;
use mongodb::error::{Error as MongoError, ErrorKind};

use blog_core::domain::{NewPost, Post, PostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, PostStream};

use super::document::{NewPostDocument, PostDocument, set_fields};
use super::object_id::string_to_id;

/// Post repository over a single MongoDB collection.
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(collection: Collection<PostDocument>) -> Self {
        Self { collection }
    }

    async fn find(&self, id: ObjectId) -> Result<Option<PostDocument>, RepoError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)
    }
}

/// Classify a driver error. Unreachable deployments are connection errors,
/// anything the server rejected is a query error.
pub(crate) fn map_mongo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let doc = NewPostDocument::from(post);
        let result = self
            .collection
            .clone_with_type::<NewPostDocument>()
            .insert_one(&doc)
            .await
            .map_err(map_mongo_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Query("inserted _id is not an ObjectId".to_string()))?;
        tracing::debug!(post_id = %id, "Inserted post");

        let stored = self
            .find(id)
            .await?
            .ok_or_else(|| RepoError::Query(format!("post {} missing after insert", id)))?;

        Ok(stored.into())
    }

    async fn list(&self) -> Result<PostStream, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        Ok(cursor
            .map(|item| item.map(Post::from).map_err(map_mongo_error))
            .boxed())
    }

    async fn get(&self, id: &str) -> Result<Post, RepoError> {
        let oid = string_to_id(id)?;
        tracing::debug!(post_id = %oid, "Finding post");

        self.find(oid)
            .await?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: &str, patch: PostUpdate) -> Result<Post, RepoError> {
        let oid = string_to_id(id)?;
        let set = set_fields(&patch);

        // MongoDB rejects an empty $set; existence is then decided by the re-read.
        if !set.is_empty() {
            tracing::debug!(post_id = %oid, fields = set.len(), "Updating post");
            let result = self
                .collection
                .update_one(doc! { "_id": oid }, doc! { "$set": set })
                .await
                .map_err(map_mongo_error)?;

            if result.matched_count == 0 {
                return Err(RepoError::NotFound);
            }
        }

        self.find(oid)
            .await?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let oid = string_to_id(id)?;
        tracing::debug!(post_id = %oid, "Deleting post");

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
