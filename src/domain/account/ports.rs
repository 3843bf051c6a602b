use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::entities::Account;
use super::errors::AccountError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for account persistence operations.
///
/// Implementations delegate concurrency control to the backing store; the
/// service layer performs no locking of its own.
#[async_trait]
pub trait AccountRepository: Send + Sync {
  /// Persists a new account, assigning its unique id. Fails with
  /// [`AccountError::DuplicateEmail`] when the email is already registered.
  async fn create(&self, account: Account) -> Result<Account, AccountError>;

  /// Fetches an account by its repository-assigned id.
  async fn get_by_id(&self, id: i64) -> Result<Account, AccountError>;

  /// Fetches an account by its unique email address.
  async fn get_by_email(&self, email: &Email) -> Result<Account, AccountError>;

  /// Returns all accounts in storage order. No sort contract beyond
  /// stability within a single read.
  async fn list(&self) -> Result<Vec<Account>, AccountError>;

  /// Persists display-attribute changes (first/last name) for an existing
  /// account and returns the updated record.
  async fn update(&self, account: Account) -> Result<Account, AccountError>;

  /// Hard-deletes an account. Deleting a missing id fails with
  /// [`AccountError::NotFound`].
  async fn delete(&self, id: i64) -> Result<(), AccountError>;

  /// Stores a freshly issued session token on the account with this email,
  /// in a single atomic statement, and returns the updated record.
  async fn record_login(&self, email: &Email, token: &str) -> Result<Account, AccountError>;

  /// Blanks the stored session token on whichever account holds `token`.
  /// A token no account holds is a no-op.
  async fn clear_token(&self, token: &str) -> Result<(), AccountError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a per-call random salt.
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError>;

  /// Verifies a plain text password against a previously produced hash.
  /// Never reconstructs or logs the plaintext.
  async fn verify(&self, password: &Password, hash: &PasswordHash)
  -> Result<bool, AccountError>;
}

/// Identity claim carried inside a signed session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
  /// Account email (subject)
  pub sub: String,
  /// Account number bound to the session
  pub account_number: i64,
  /// Issued-at, seconds since the epoch
  pub iat: u64,
  /// Expiration, seconds since the epoch
  pub exp: u64,
}

/// Service trait for issuing and validating signed session tokens.
///
/// The signing secret is process-wide configuration loaded once at startup;
/// it is never rotated mid-process.
pub trait TokenService: Send + Sync {
  /// Issues a signed token binding a session to the given identity claim.
  fn issue(&self, email: &str, account_number: i64) -> Result<String, AccountError>;

  /// Validates signature, algorithm and expiration, returning the embedded
  /// claims. Any failure collapses into [`AccountError::TokenInvalid`].
  fn validate(&self, token: &str) -> Result<SessionClaims, AccountError>;
}
