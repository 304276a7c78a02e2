//! Router assembly for the brand kit service.
//!
//! [`build_app_router`] is the one place the route tree meets the HTTP
//! middleware, so `main.rs` and the integration tests serve identical stacks.

use std::any::Any;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;

/// Message sent when a request outlives `request_timeout_secs`.
pub const TIMEOUT_MESSAGE: &str = "ERROR: Request timed out";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap the API routes in the service's middleware.
///
/// Outermost first, a request passes through:
///
/// - CORS for the configured frontend origins
/// - `x-request-id` assignment, then a span per request carrying it
/// - the timeout envelope (a bare 408 becomes `{message, data: null}`)
/// - the request timeout itself
/// - panic recovery, answering with the generic 500 envelope
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let traced = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    routes::api_routes(config)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(middleware::map_response(timeout_envelope))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(traced)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the frontend: GET/POST with JSON or multipart bodies.
///
/// Panics at startup on an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

// ---- private helpers ----

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    AppError::InternalError(format!("Handler panicked: {detail}")).into_response()
}

/// Handlers never answer 408 themselves, so any 408 here came from the
/// timeout layer with an empty body.
async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("Request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ApiResponse::<()>::message(TIMEOUT_MESSAGE)),
    )
        .into_response()
}
