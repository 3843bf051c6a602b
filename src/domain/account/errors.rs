use thiserror::Error;

/// Main account domain error type
#[derive(Debug, Error)]
pub enum AccountError {
  /// Authentication failed. Deliberately covers both "wrong password" and
  /// "no such account" so callers cannot tell which part of a login failed.
  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("account with email {0} already exists")]
  DuplicateEmail(String),

  #[error("account not found")]
  NotFound,

  /// A presented session token is missing, malformed, tampered with,
  /// expired, or no longer matches the stored token.
  #[error("invalid session token")]
  TokenInvalid,

  #[error("{0}")]
  Validation(#[from] ValidationError),

  #[error("repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("hash error: {0}")]
  Hash(#[from] HashError),

  #[error("token error: {0}")]
  Token(#[from] TokenError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("query execution failed: {0}")]
  QueryFailed(String),

  #[error("record not found")]
  NotFound,

  #[error("duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("failed to hash password: {0}")]
  HashingFailed(String),

  #[error("failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("invalid hash format")]
  InvalidFormat,
}

/// Token signing errors. Validation failures are not carried here: they all
/// collapse into [`AccountError::TokenInvalid`].
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("failed to sign token: {0}")]
  Signing(String),

  #[error("token service misconfigured: {0}")]
  Misconfigured(String),
}

/// Input validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("invalid email format: {0}")]
  InvalidEmail(String),

  #[error("password must not be empty")]
  PasswordEmpty,

  #[error("password is too long (maximum 128 characters)")]
  PasswordTooLong,

  #[error("invalid password hash format")]
  InvalidPasswordHash,

  #[error("invalid id given: {0}")]
  InvalidId(String),
}

// Automatic conversions from external error types

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
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AccountError {
  fn from(error: sqlx::Error) -> Self {
    AccountError::Repository(RepositoryError::from(error))
  }
}
