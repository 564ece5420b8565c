//! Blog post handlers.

use actix_web::{HttpResponse, Scope, web};
use serde_json::Value;

use blog_core::DomainError;
use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_shared::{CreatePostRequest, RequestSchema, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// The posts router, mounted at `path`.
pub fn scope(path: &str) -> Scope {
    web::scope(path)
        .app_data(json_config())
        .service(
            web::resource(vec!["", "/"])
                .route(web::get().to(list_posts))
                .route(web::post().to(create_post)),
        )
        .service(
            web::resource("/{id}")
                .route(web::put().to(update_post))
                .route(web::delete().to(delete_post)),
        )
}

/// Malformed or non-JSON bodies are client errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!("Rejected request body: {}", err);
        AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
    })
}

fn parse_body<T: RequestSchema>(body: &Value) -> AppResult<T> {
    T::from_json(body).map_err(|err| {
        tracing::warn!("{}", err);
        err.into()
    })
}

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.list().await)
}

/// POST /
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let req: CreatePostRequest = parse_body(&body)?;

    let post = state
        .posts
        .create(NewPost::new(req.title, req.content, req.author))
        .await;
    tracing::debug!(id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let req: UpdatePostRequest = parse_body(&body)?;

    if !req.id_matches(&path_id) {
        let err = DomainError::IdMismatch {
            path: path_id,
            body: req.id,
        };
        tracing::warn!("{}", err);
        return Err(err.into());
    }

    // Only canonical ids were ever handed out by the store.
    let id: PostId = path_id
        .parse()
        .map_err(|_| AppError::from(DomainError::post_not_found(&path_id)))?;

    tracing::info!("Updating blog post with id `{}`", id);
    state
        .posts
        .update(Post {
            id,
            title: req.title,
            content: req.content,
            author: req.author,
            publish_date: req.publish_date,
        })
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /{id}
///
/// Answers 204 whether or not the post existed.
pub async fn delete_post(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let path_id = path.into_inner();

    let deleted = match path_id.parse::<PostId>() {
        Ok(id) => state.posts.delete(id).await,
        Err(err) => {
            tracing::debug!("Ignoring delete: {}", err);
            return HttpResponse::NoContent().finish();
        }
    };

    match deleted {
        Ok(post) => tracing::info!("Deleted blog post with id `{}`", post.id),
        Err(RepoError::NotFound(id)) => {
            tracing::debug!("Ignoring delete of unknown blog post `{}`", id)
        }
    }

    HttpResponse::NoContent().finish()
}
