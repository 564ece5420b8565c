//! In-memory post store.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::seed::seed_posts;

struct Posts {
    items: Vec<Post>,
    /// Last id handed out. Deletes never rewind it.
    last_id: u64,
}

/// In-memory post store using a `Vec` behind an async RwLock.
///
/// Posts keep insertion order. Every operation takes the lock once, so each
/// mutation is applied atomically with respect to other requests.
pub struct InMemoryPostRepository {
    posts: RwLock<Posts>,
}

impl InMemoryPostRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Posts {
                items: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// A store holding the example posts.
    pub fn seeded() -> Self {
        let mut posts = Posts {
            items: Vec::new(),
            last_id: 0,
        };
        for new_post in seed_posts() {
            posts.insert(new_post);
        }
        tracing::debug!(count = posts.items.len(), "Seeded post store");

        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Posts {
    fn insert(&mut self, new_post: NewPost) -> Post {
        self.last_id += 1;
        let post = Post::new(PostId(self.last_id), new_post);
        self.items.push(post.clone());
        post
    }

    fn position(&self, id: PostId) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Post {
        let mut posts = self.posts.write().await;
        posts.insert(post)
    }

    async fn list(&self) -> Vec<Post> {
        self.posts.read().await.items.clone()
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts.position(post.id).ok_or(RepoError::NotFound(post.id))?;

        let stored = &mut posts.items[index];
        stored.replace_with(post);
        Ok(stored.clone())
    }

    async fn delete(&self, id: PostId) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(posts.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryPostRepository::new();
        let first = store.create(NewPost::new("A", "B", "C")).await;
        let second = store.create(NewPost::new("D", "E", "F")).await;

        assert_eq!(first.id, PostId(1));
        assert_eq!(second.id, PostId(2));
        assert_eq!(store.list().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryPostRepository::new();
        let first = store.create(NewPost::new("A", "B", "C")).await;
        store.delete(first.id).await.unwrap();

        let next = store.create(NewPost::new("A", "B", "C")).await;
        assert_eq!(next.id, PostId(2));
    }

    #[tokio::test]
    async fn test_seeded_store_has_example_posts() {
        let store = InMemoryPostRepository::seeded();
        let posts = store.list().await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Why I have never eaten a toad");
        assert_eq!(posts[1].author, "Shine On Me");
        assert!(!posts[0].content.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = InMemoryPostRepository::new();
        let mut post = store.create(NewPost::new("A", "B", "C")).await;
        post.title = "Renamed".to_string();

        let updated = store.update(post.clone()).await.unwrap();

        assert_eq!(updated, post);
        assert_eq!(store.list().await, vec![post]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = InMemoryPostRepository::seeded();
        let before = store.list().await;
        let ghost = Post::new(PostId(404), NewPost::new("A", "B", "C"));

        let result = store.update(ghost).await;

        assert!(matches!(result, Err(RepoError::NotFound(PostId(404)))));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_post() {
        let store = InMemoryPostRepository::seeded();
        let posts = store.list().await;

        let removed = store.delete(posts[0].id).await.unwrap();

        assert_eq!(removed, posts[0]);
        assert_eq!(store.list().await, vec![posts[1].clone()]);
        assert!(matches!(
            store.delete(posts[0].id).await,
            Err(RepoError::NotFound(_))
        ));
    }
}
