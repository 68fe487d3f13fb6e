//! HTTP API.
//!
//! # Structure
//!
//! - [`resource`] - the five CRUD routes, generic over every resource
//! - [`employee`] - employee graph routes (subordinates, salaries, job categories)
//! - [`health`] - store reachability
//! - [`extract`] - JSON body extractor that lets `null` through

pub mod employee;
pub mod extract;
pub mod health;
pub mod resource;
pub mod state;


use axum::Router;
use tower_http::trace::TraceLayer;

use crate::entities::prelude::*;

pub use state::AppState;

/// Build the router with every resource group registered.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(resource::routes::<Employees>())
        .merge(employee::routes())
        .merge(resource::routes::<Addresses>())
        .merge(resource::routes::<Cities>())
        .merge(resource::routes::<Countries>())
        .merge(resource::routes::<JobCategories>())
        .merge(resource::routes::<Salaries>())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
