//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A write referenced a row that does not exist (unknown chat or message)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}
