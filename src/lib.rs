pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod models;
pub mod response;

pub use error::{AppError, Result};
pub use response::ServiceResponse;
