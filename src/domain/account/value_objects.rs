use argon2::PasswordHash as Argon2PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValidationError;

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation. Normalizes to lowercase so the
  /// repository's unique constraint is case-insensitive in practice.
  pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
    let email = email.into();

    if !email.validate_email() {
      return Err(ValidationError::InvalidEmail(email));
    }

    Ok(Self(email.to_lowercase()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  // No minimum length policy: existing deployments carry short passwords.
  const MAX_LENGTH: usize = 128;

  /// Creates a new Password after validation.
  pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValidationError::PasswordEmpty);
    }

    if password.len() > Self::MAX_LENGTH {
      return Err(ValidationError::PasswordTooLong);
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Never expose the plaintext through Debug or Display
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (Argon2id PHC String)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Wraps an existing PHC-format hash string after checking it parses.
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValidationError> {
    let hash = hash.into();

    Argon2PasswordHash::new(&hash).map_err(|_| ValidationError::InvalidPasswordHash)?;

    Ok(Self(hash))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_email_validation() {
    assert!(Email::new("test@example.com").is_ok());
    assert!(Email::new("user.name@domain.co.uk").is_ok());

    assert!(Email::new("invalid").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("test@").is_err());
  }

  #[test]
  fn test_email_normalization() {
    let email = Email::new("John@X.COM").unwrap();
    assert_eq!(email.as_str(), "john@x.com");
  }

  #[test]
  fn test_password_accepts_short_passwords() {
    // The service has no minimum-length policy
    assert!(Password::new("secret").is_ok());
    assert!(Password::new("a").is_ok());
  }

  #[test]
  fn test_password_rejects_empty_and_oversized() {
    assert!(matches!(
      Password::new(""),
      Err(ValidationError::PasswordEmpty)
    ));

    let long_password = "a".repeat(129);
    assert!(matches!(
      Password::new(long_password),
      Err(ValidationError::PasswordTooLong)
    ));
  }

  #[test]
  fn test_password_debug_masks_value() {
    let password = Password::new("secret").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
    assert_eq!(format!("{}", password), "***");
  }

  #[test]
  fn test_password_hash_requires_phc_format() {
    assert!(PasswordHash::from_hash("not-a-hash").is_err());

    let phc = "$argon2id$v=19$m=19456,t=2,p=1$MTIzNDU2Nzg5MDEyMzQ1Ng$GpZ3sK/oH9p7bIDjom8ugFBawL49j+F1+MFZJcJMF10";
    assert!(PasswordHash::from_hash(phc).is_ok());
  }
}
