//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! The only backend is an in-memory post store; data lives for the process lifetime.

pub mod store;

pub use store::{InMemoryPostRepository, seed_posts};
