use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post store - the collection of posts and the operations over it.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Assign a fresh id and publish date, append, and return the stored post.
    async fn create(&self, post: NewPost) -> Post;

    /// All posts in insertion order.
    async fn list(&self) -> Vec<Post>;

    /// Replace every field but `id` of the stored post carrying `post.id`.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove the post with the given id and return it.
    async fn delete(&self, id: PostId) -> Result<Post, RepoError>;
}
