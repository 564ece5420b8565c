//! Error handling - client messages as plain text, or RFC 7807 responses on request.

use actix_web::{
    HttpMessage, HttpResponse, ResponseError,
    dev::ServiceResponse,
    http::{StatusCode, header::ContentType},
    middleware::ErrorHandlerResponse,
};
use std::fmt;

use blog_core::error::{DomainError, RepoError};
use blog_shared::{ErrorResponse, ValidationError};

use crate::observability::RequestId;

/// Application-level error type.
///
/// Renders as a `text/plain` body holding the message. When the problem
/// format is enabled, [`problem_details`] re-renders it as RFC 7807 JSON.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => f.write_str(msg),
        }
    }
}

impl AppError {
    /// The RFC 7807 form of this error.
    pub fn problem(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Error handler that swaps the plain-text body of an [`AppError`] for
/// Problem Details JSON. Other error responses pass through untouched.
pub fn problem_details<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let problem = res
        .response()
        .error()
        .and_then(|err| err.as_error::<AppError>())
        .map(AppError::problem);

    let Some(mut problem) = problem else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    if let Some(request_id) = res.request().extensions().get::<RequestId>() {
        problem = problem.with_request_id(request_id.as_str());
    }

    let (req, res) = res.into_parts();
    let res = HttpResponse::build(res.status()).json(problem);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            err @ DomainError::IdMismatch { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => DomainError::post_not_found(id).into(),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
