//! Employee graph routes.

use axum::Router;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;

use super::resource::respond;
use super::state::AppState;
use crate::db::Repository;
use crate::entities::prelude::Employees;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Employee/{id}/Subordinates", get(subordinates))
        .route("/Employee/{id}/Salaries", get(salaries))
        .route("/Employee/{id}/JobCategories", get(job_categories))
}

async fn subordinates(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    respond(Repository::<Employees>::new(state.db).subordinates(id).await)
}

async fn salaries(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    respond(Repository::<Employees>::new(state.db).salaries(id).await)
}

async fn job_categories(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    respond(Repository::<Employees>::new(state.db).job_categories(id).await)
}
