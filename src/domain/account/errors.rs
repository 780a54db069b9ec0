use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Main account error type
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("{0}")]
  InvalidInput(#[from] ValueObjectError),

  #[error("Password too short, minimum {min} characters required")]
  PasswordTooShort { min: usize },

  #[error("Email already exists")]
  DuplicateEmail,

  #[error("Invalid email or password")]
  InvalidCredentials,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),
}

/// Caller-facing classification of an [`AccountError`]
///
/// Storage and hashing failures collapse into `InternalFailure` so their
/// detail can be logged without being handed back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountErrorKind {
  InvalidInput,
  DuplicateEmail,
  InvalidCredentials,
  InternalFailure,
}

impl AccountError {
  pub fn kind(&self) -> AccountErrorKind {
    match self {
      AccountError::InvalidInput(_) | AccountError::PasswordTooShort { .. } => {
        AccountErrorKind::InvalidInput
      }
      AccountError::DuplicateEmail => AccountErrorKind::DuplicateEmail,
      AccountError::InvalidCredentials => AccountErrorKind::InvalidCredentials,
      AccountError::Repository(_) | AccountError::Hash(_) => AccountErrorKind::InternalFailure,
    }
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),

  #[error("Stored record is corrupt: {0}")]
  CorruptRecord(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Invalid hash parameters: {0}")]
  InvalidParams(String),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}
