//! Database connection pool and repositories.

pub mod connection;
pub mod employee;
pub mod repository;
pub mod schema;

#[cfg(test)]
pub(crate) mod tests;

pub use connection::{TableCounts, connect, get_table_counts, get_version, test_connection};
pub use repository::{Repository, Resource};
pub use schema::create_tables;
