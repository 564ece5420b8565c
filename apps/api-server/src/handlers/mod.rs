//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes, with the posts router under `posts_path`.
pub fn configure_routes(cfg: &mut web::ServiceConfig, posts_path: &str) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(posts::scope(posts_path));
}
