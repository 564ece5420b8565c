//! Data Transfer Objects - request bodies and their required-field schemas.
//!
//! Request bodies are validated in two passes: every required key is checked
//! for presence in declaration order, stopping at the first absent one, and only
//! then are the values decoded into their typed fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a request body was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    #[error("Invalid `{0}` in request body")]
    InvalidField(&'static str),

    #[error("Request body must be a JSON object")]
    NotAnObject,
}

/// A request body with a fixed, ordered list of required keys.
pub trait RequestSchema: Sized {
    /// Keys that must be present, in the order they are checked.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build the typed request from a body whose required keys are all present.
    fn decode(body: &Map<String, Value>) -> Result<Self, ValidationError>;

    /// Validate and decode a raw JSON body.
    fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError::NotAnObject)?;
        check_required(object, Self::REQUIRED_FIELDS)?;
        Self::decode(object)
    }
}

/// Report the first of `fields` that is absent from `body`.
///
/// A key holding `null` counts as present.
pub fn check_required(
    body: &Map<String, Value>,
    fields: &[&'static str],
) -> Result<(), ValidationError> {
    match fields.iter().find(|field| !body.contains_key(**field)) {
        Some(field) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}

fn field<'a, T: Deserialize<'a>>(
    body: &'a Map<String, Value>,
    name: &'static str,
) -> Result<T, ValidationError> {
    let value = body.get(name).ok_or(ValidationError::MissingField(name))?;
    T::deserialize(value).map_err(|_| ValidationError::InvalidField(name))
}

/// Render a JSON value the way it reads in a URL path: strings without quotes,
/// everything else in its JSON form.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Body of `POST /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl RequestSchema for CreatePostRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "content", "author"];

    fn decode(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: field(body, "title")?,
            content: field(body, "content")?,
            author: field(body, "author")?,
        })
    }
}

/// Body of `PUT /{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostRequest {
    /// The body id as plain text, for comparison with the path id.
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl RequestSchema for UpdatePostRequest {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["id", "title", "content", "author", "publishDate"];

    fn decode(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let id = body
            .get("id")
            .map(plain_text)
            .ok_or(ValidationError::MissingField("id"))?;

        Ok(Self {
            id,
            title: field(body, "title")?,
            content: field(body, "content")?,
            author: field(body, "author")?,
            publish_date: field(body, "publishDate")?,
        })
    }
}

impl UpdatePostRequest {
    /// Whether the body id names the same post as the path segment.
    pub fn id_matches(&self, path_id: &str) -> bool {
        self.id == path_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_accepts_complete_body() {
        let req =
            CreatePostRequest::from_json(&json!({"title": "A", "content": "B", "author": "C"}))
                .unwrap();

        assert_eq!(req.title, "A");
        assert_eq!(req.content, "B");
        assert_eq!(req.author, "C");
    }

    #[test]
    fn reports_only_the_first_missing_field() {
        let err = CreatePostRequest::from_json(&json!({"title": "A"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("content"));

        let err = CreatePostRequest::from_json(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("title"));
        assert_eq!(err.to_string(), "Missing `title` in request body");
    }

    #[test]
    fn presence_is_checked_before_types() {
        let err = CreatePostRequest::from_json(&json!({"title": 5, "content": "B"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("author"));

        let err = CreatePostRequest::from_json(&json!({"title": 5, "content": "B", "author": "C"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidField("title"));
    }

    #[test]
    fn rejects_non_object_bodies() {
        let err = CreatePostRequest::from_json(&json!(["title"])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn update_checks_fields_in_order() {
        let err = UpdatePostRequest::from_json(&json!({
            "title": "A", "content": "B", "author": "C"
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("id"));

        let err = UpdatePostRequest::from_json(&json!({
            "id": "1", "title": "A", "content": "B", "author": "C"
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("publishDate"));
    }

    #[test]
    fn update_rejects_unparseable_publish_date() {
        let err = UpdatePostRequest::from_json(&json!({
            "id": "1", "title": "A", "content": "B", "author": "C", "publishDate": "yesterday"
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidField("publishDate"));
    }

    #[test]
    fn update_id_compares_as_plain_text() {
        let body = json!({
            "id": 3, "title": "A", "content": "B", "author": "C",
            "publishDate": "2024-01-02T03:04:05Z"
        });
        let req = UpdatePostRequest::from_json(&body).unwrap();

        assert_eq!(req.id, "3");
        assert!(req.id_matches("3"));
        assert!(!req.id_matches("03"));
        assert_eq!(req.publish_date.to_rfc3339(), "2024-01-02T03:04:05+00:00");
    }
}
