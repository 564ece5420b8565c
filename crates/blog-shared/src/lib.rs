//! # Blog Shared
//!
//! Wire types shared by the server and its clients: request bodies with their
//! required-field schemas, and the error envelope.

pub mod dto;
pub mod response;

pub use dto::{CreatePostRequest, RequestSchema, UpdatePostRequest, ValidationError};
pub use response::ErrorResponse;
