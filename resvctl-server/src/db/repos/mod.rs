//! Repository implementations for database access
//!
//! Each repository borrows the store's pool and returns
//! `Result<T, DbError>`; a missing row is `DbError::NotFound`, never an
//! empty success.

pub mod customers;
pub mod reservations;

pub use customers::{CustomerRepo, CustomerRow};
pub use reservations::{ReservationRepo, ReservationRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

impl DbError {
    /// True when the store rejected a write on a foreign-key, check or
    /// uniqueness constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => !matches!(
                e.kind(),
                sqlx::error::ErrorKind::Other
            ),
            _ => false,
        }
    }
}
