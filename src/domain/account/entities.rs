use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for randomly assigned account numbers.
const ACCOUNT_NUMBER_RANGE: i64 = 1_000_000;

/// Account entity: identity, credential and session record for one customer.
///
/// Serialized with camelCase field names; the password hash is never written
/// outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
  /// Unique identifier, assigned by the repository on creation. Zero until
  /// the account has been persisted.
  pub id: i64,
  /// Display first name
  pub first_name: String,
  /// Display last name
  pub last_name: String,
  /// Email address (unique, used for login)
  pub email: String,
  /// Argon2id password hash; produced once at creation, immutable thereafter
  #[serde(skip_serializing, default)]
  pub password_hash: String,
  /// Current session token; empty string when no session is active
  #[serde(default)]
  pub token: String,
  /// Randomly assigned account number, distinct from `id`
  pub number: i64,
  /// Balance in minor units; zero at creation and never mutated by this core
  pub balance: i64,
  /// Timestamp set at creation, immutable
  pub created_at: DateTime<Utc>,
}

impl Account {
  /// Creates a new, not-yet-persisted account with a random account number,
  /// zero balance and no active session.
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
    password_hash: impl Into<String>,
  ) -> Self {
    Self {
      id: 0,
      first_name: first_name.into(),
      last_name: last_name.into(),
      email: email.into(),
      password_hash: password_hash.into(),
      token: String::new(),
      number: rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_RANGE),
      balance: 0,
      created_at: Utc::now(),
    }
  }

  /// Records a freshly issued session token on the account.
  pub fn record_login(&mut self, token: impl Into<String>) {
    self.token = token.into();
  }

  /// Clears the active session token.
  pub fn clear_token(&mut self) {
    self.token.clear();
  }

  /// Whether the account currently holds a session token.
  pub fn has_active_session(&self) -> bool {
    !self.token.is_empty()
  }

  /// Applies a partial rename; `None` fields are left untouched.
  pub fn rename(&mut self, first_name: Option<String>, last_name: Option<String>) {
    if let Some(first_name) = first_name {
      self.first_name = first_name;
    }
    if let Some(last_name) = last_name {
      self.last_name = last_name;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_account_defaults() {
    let account = Account::new("John", "Doe", "john@x.com", "hash");

    assert_eq!(account.id, 0);
    assert_eq!(account.balance, 0);
    assert!(account.token.is_empty());
    assert!(!account.has_active_session());
    assert!((0..ACCOUNT_NUMBER_RANGE).contains(&account.number));
  }

  #[test]
  fn test_record_login_and_clear() {
    let mut account = Account::new("John", "Doe", "john@x.com", "hash");

    account.record_login("token-123");
    assert!(account.has_active_session());
    assert_eq!(account.token, "token-123");

    account.clear_token();
    assert!(!account.has_active_session());
  }

  #[test]
  fn test_rename_partial() {
    let mut account = Account::new("John", "Doe", "john@x.com", "hash");

    account.rename(Some("Jane".to_string()), None);
    assert_eq!(account.first_name, "Jane");
    assert_eq!(account.last_name, "Doe");
  }

  #[test]
  fn test_password_hash_not_serialized() {
    let account = Account::new("John", "Doe", "john@x.com", "super-secret-hash");
    let json = serde_json::to_value(&account).unwrap();

    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password").is_none());
    assert_eq!(json["firstName"], "John");
    assert_eq!(json["email"], "john@x.com");
  }
}
