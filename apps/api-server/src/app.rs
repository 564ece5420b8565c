//! Application assembly - state, middleware and routes.

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Condition, ErrorHandlers},
    web,
};
use tracing_actix_web::TracingLogger;

use crate::config::{AppConfig, ErrorFormat};
use crate::handlers;
use crate::middleware::error::problem_details;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Build the actix application for one worker.
pub fn build_app(
    state: AppState,
    config: AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let posts_path = config.posts_path;
    let problem_errors = config.error_format == ErrorFormat::Problem;

    App::new()
        .wrap(Condition::new(
            problem_errors,
            ErrorHandlers::new().default_handler(problem_details),
        ))
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .app_data(web::Data::new(state))
        .configure(move |cfg| handlers::configure_routes(cfg, &posts_path))
}
