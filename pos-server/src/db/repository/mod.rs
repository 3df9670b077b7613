//! Repository Module
//!
//! Free-function CRUD over SQLite. Every function takes
//! `&mut SqliteConnection`, so callers decide the transaction boundary:
//! pass `&mut *tx` inside `pool.begin()` or `&mut *conn` from `pool.acquire()`.

// Catalogue
pub mod menu;
pub mod menu_group;
pub mod product;

// Tables
pub mod order_table;
pub mod table_group;

// Orders
pub mod order;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// `?,?,?` for a dynamic `IN (...)` clause
///
/// Variable-length IN lists stay runtime queries.
pub(crate) fn placeholders(n: usize) -> String {
    (0..n).map(|_| "?").collect::<Vec<_>>().join(",")
}
