use axum::{routing::get, Json, Router};

use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /ping -- liveness check, no dependencies touched.
async fn ping() -> Json<ApiResponse<()>> {
    Json(ApiResponse::<()>::message("Pong"))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
