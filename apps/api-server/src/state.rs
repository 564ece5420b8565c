//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let posts = if config.seed_posts {
            InMemoryPostRepository::seeded()
        } else {
            tracing::info!("Seeding disabled - starting with an empty post store");
            InMemoryPostRepository::new()
        };

        tracing::info!("Application state initialized");

        Self::with_repository(Arc::new(posts))
    }

    /// Build the state around an existing store.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
