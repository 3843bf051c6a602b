use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::account::errors::{AccountError, TokenError};
use crate::domain::account::ports::{SessionClaims, TokenService};

/// HMAC-SHA256 session token service built on JWTs.
///
/// The signing secret is injected at construction and lives for the whole
/// process; there is no rotation. Validation pins the algorithm to HS256 so
/// a token claiming any other algorithm is rejected outright
/// (algorithm-confusion defense), and enforces the embedded expiration.
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  ttl_seconds: u64,
}

impl JwtTokenService {
  /// Creates a token service from the configured secret and token lifetime.
  ///
  /// # Errors
  /// Fails when the secret is empty; the service must never run with a
  /// defaulted or blank signing key.
  pub fn new(secret: &str, ttl_seconds: u64) -> Result<Self, AccountError> {
    if secret.is_empty() {
      return Err(AccountError::Token(TokenError::Misconfigured(
        "signing secret must not be empty".to_string(),
      )));
    }

    let validation = Validation::new(Algorithm::HS256);

    Ok(Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      ttl_seconds,
    })
  }
}

impl TokenService for JwtTokenService {
  fn issue(&self, email: &str, account_number: i64) -> Result<String, AccountError> {
    let now = Utc::now().timestamp() as u64;

    let claims = SessionClaims {
      sub: email.to_string(),
      account_number,
      iat: now,
      exp: now + self.ttl_seconds,
    };

    encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| AccountError::Token(TokenError::Signing(e.to_string())))
  }

  fn validate(&self, token: &str) -> Result<SessionClaims, AccountError> {
    // Bad signature, malformed structure, wrong algorithm and expired tokens
    // all collapse into the same failure; callers never learn which.
    decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
      .map(|data| data.claims)
      .map_err(|_| AccountError::TokenInvalid)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn service() -> JwtTokenService {
    JwtTokenService::new("test-secret", 3600).unwrap()
  }

  #[test]
  fn test_issue_and_validate_round_trip() {
    let service = service();

    let token = service.issue("john@x.com", 123_456).unwrap();
    let claims = service.validate(&token).unwrap();

    assert_eq!(claims.sub, "john@x.com");
    assert_eq!(claims.account_number, 123_456);
    assert!(claims.exp > claims.iat);
  }

  #[test]
  fn test_empty_secret_is_rejected() {
    let result = JwtTokenService::new("", 3600);
    assert!(matches!(
      result,
      Err(AccountError::Token(TokenError::Misconfigured(_)))
    ));
  }

  #[test]
  fn test_garbage_token_is_invalid() {
    let service = service();
    assert!(matches!(
      service.validate("garbage"),
      Err(AccountError::TokenInvalid)
    ));
    assert!(matches!(
      service.validate(""),
      Err(AccountError::TokenInvalid)
    ));
  }

  #[test]
  fn test_token_signed_with_other_secret_is_invalid() {
    let service = service();
    let other = JwtTokenService::new("other-secret", 3600).unwrap();

    let token = other.issue("john@x.com", 1).unwrap();
    assert!(matches!(
      service.validate(&token),
      Err(AccountError::TokenInvalid)
    ));
  }

  #[test]
  fn test_tampered_token_is_invalid() {
    let service = service();
    let token = service.issue("john@x.com", 1).unwrap();

    // Flip a character in the payload segment
    let mut tampered = token.into_bytes();
    let mid = tampered.len() / 2;
    tampered[mid] = if tampered[mid] == b'a' { b'b' } else { b'a' };
    let tampered = String::from_utf8(tampered).unwrap();

    assert!(matches!(
      service.validate(&tampered),
      Err(AccountError::TokenInvalid)
    ));
  }

  #[test]
  fn test_expired_token_is_invalid() {
    let service = service();
    let now = Utc::now().timestamp() as u64;

    // Expired well beyond the default validation leeway
    let claims = SessionClaims {
      sub: "john@x.com".to_string(),
      account_number: 1,
      iat: now - 7200,
      exp: now - 3600,
    };
    let token = encode(
      &Header::new(Algorithm::HS256),
      &claims,
      &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    assert!(matches!(
      service.validate(&token),
      Err(AccountError::TokenInvalid)
    ));
  }

  #[test]
  fn test_algorithm_mismatch_is_invalid() {
    let service = service();
    let now = Utc::now().timestamp() as u64;

    let claims = SessionClaims {
      sub: "john@x.com".to_string(),
      account_number: 1,
      iat: now,
      exp: now + 3600,
    };
    // Same secret, different MAC family member: still rejected
    let token = encode(
      &Header::new(Algorithm::HS384),
      &claims,
      &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    assert!(matches!(
      service.validate(&token),
      Err(AccountError::TokenInvalid)
    ));
  }
}
