//! Health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use super::state::AppState;
use crate::db;
use crate::response::ServiceResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// 200 when the store answers, 503 otherwise.
async fn health(State(state): State<AppState>) -> Response {
    match db::test_connection(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(ServiceResponse::found("ok"))).into_response(),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ServiceResponse::<&str>::failure(e.to_string())),
            )
                .into_response()
        }
    }
}
