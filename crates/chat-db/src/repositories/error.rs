//! Error handling utilities for repositories

use chat_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Foreign key and check violations are kept apart from other failures so
/// callers can log them distinctly; both still surface as internal errors.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
            return DomainError::ConstraintViolation(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}
