//! Post service - validates input and runs one repository operation per call.

use std::sync::Arc;

use futures::TryStreamExt;

use crate::domain::{CreatePost, Post, PostUpdate};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validation::{validate_create, validate_update};

const ENTITY: &str = "Post";

/// Entry point used by request handlers.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreatePost) -> Result<Post, DomainError> {
        let post = validate_create(input)?;
        Ok(self.repo.create(post).await?)
    }

    /// Collect every post in store order.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts: Vec<Post> = self.repo.list().await?.try_collect().await?;
        Ok(posts)
    }

    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        self.repo.get(id).await.map_err(|e| with_id(e, id))
    }

    pub async fn update(&self, id: &str, input: PostUpdate) -> Result<Post, DomainError> {
        let patch = validate_update(input)?;
        self.repo.update(id, patch).await.map_err(|e| with_id(e, id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| with_id(e, id))
    }
}

fn with_id(err: RepoError, id: &str) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id: id.to_string(),
        },
        other => other.into(),
    }
}
