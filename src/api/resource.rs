//! CRUD routes shared by every resource.
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/{Resource}/GetAll` | 200 list, 404 when `data` is null |
//! | GET | `/{Resource}/{id}` | 200 item, 404 when `data` is null |
//! | POST | `/{Resource}` | 200 list, 400 when the body is null |
//! | PUT | `/{Resource}` | 200 item, 404 when `data` is null, 400 when the body is null |
//! | DELETE | `/{Resource}/{id}` | 200 remaining list, 404 when `data` is null |
//!
//! The 404 rule only looks at `data`, so a caught failure (`success ==
//! false`) and a plain absence both answer 404. Create answers 200 even when
//! the repository reports a failure.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use super::extract::NullableJson;
use super::state::AppState;
use crate::db::{Repository, Resource};
use crate::response::ServiceResponse;

/// Routes for one resource, rooted at `/{R::NAME}`.
pub fn routes<R: Resource>() -> Router<AppState> {
    let base = format!("/{}", R::NAME);
    Router::new()
        .route(&format!("{base}/GetAll"), get(get_all::<R>))
        .route(&format!("{base}/{{id}}"), get(get_one::<R>).delete(delete_one::<R>))
        .route(&base, post(create::<R>).put(update::<R>))
}

pub async fn get_all<R: Resource>(State(state): State<AppState>) -> Response {
    respond(Repository::<R>::new(state.db).get_all().await)
}

pub async fn get_one<R: Resource>(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    respond(Repository::<R>::new(state.db).get_by_id(id).await)
}

pub async fn create<R: Resource>(State(state): State<AppState>, NullableJson(dto): NullableJson<R::Create>) -> Response {
    let Some(dto) = dto else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let response = Repository::<R>::new(state.db).create(dto).await;
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn update<R: Resource>(State(state): State<AppState>, NullableJson(dto): NullableJson<R::Update>) -> Response {
    let Some(dto) = dto else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    respond(Repository::<R>::new(state.db).update(dto).await)
}

pub async fn delete_one<R: Resource>(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    respond(Repository::<R>::new(state.db).delete(id).await)
}

/// 404 with the envelope when it carries no data, 200 otherwise.
pub(crate) fn respond<T: Serialize>(response: ServiceResponse<T>) -> Response {
    let status = if response.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(response)).into_response()
}
