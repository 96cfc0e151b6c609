use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::{NewPost, Post, PostUpdate};
use crate::error::RepoError;

/// Lazy sequence of posts, in whatever order the store yields them.
pub type PostStream = BoxStream<'static, Result<Post, RepoError>>;

/// Post repository - the only component with storage access.
///
/// Identifiers cross this boundary as hex strings; each implementation
/// parses them into its native type and fails with
/// [`RepoError::InvalidIdentifier`] before touching the store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a validated post and return it as stored.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Stream every post. Each call starts from the beginning.
    async fn list(&self) -> Result<PostStream, RepoError>;

    /// Find a post by its identifier.
    async fn get(&self, id: &str) -> Result<Post, RepoError>;

    /// Merge the present fields of `patch` into a post and return the result.
    async fn update(&self, id: &str, patch: PostUpdate) -> Result<Post, RepoError>;

    /// Remove a post permanently.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}
