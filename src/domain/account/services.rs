use std::sync::Arc;

use super::entities::Account;
use super::errors::AccountError;
use super::ports::{AccountRepository, PasswordHasher, TokenService};
use super::value_objects::{Email, Password};

/// Account service implementing the authentication and authorization core:
/// registration, login, logout and the per-request authorization check the
/// HTTP gate delegates to.
pub struct AccountService {
  repo: Arc<dyn AccountRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_service: Arc<dyn TokenService>,
}

impl AccountService {
  pub fn new(
    repo: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
  ) -> Self {
    Self {
      repo,
      password_hasher,
      token_service,
    }
  }

  /// Registers a new account.
  ///
  /// The password is hashed before anything touches storage, and a session
  /// token is issued immediately so the creation response already carries a
  /// usable session.
  ///
  /// # Errors
  /// Returns [`AccountError::DuplicateEmail`] when the email is taken.
  pub async fn register(
    &self,
    first_name: String,
    last_name: String,
    email: Email,
    password: Password,
  ) -> Result<Account, AccountError> {
    let password_hash = self.password_hasher.hash(&password).await?;

    let mut account = Account::new(
      first_name,
      last_name,
      email.into_inner(),
      password_hash.into_inner(),
    );

    let token = self.token_service.issue(&account.email, account.number)?;
    account.record_login(token);

    let created = self.repo.create(account).await?;

    tracing::info!(account_id = created.id, "account registered");

    Ok(created)
  }

  /// Authenticates an account and persists a freshly issued session token.
  ///
  /// Fails uniformly with [`AccountError::InvalidCredentials`] whether the
  /// email is unknown or the password is wrong, so callers cannot probe for
  /// registered addresses.
  pub async fn login(&self, email: Email, password: Password) -> Result<Account, AccountError> {
    let account = self
      .repo
      .get_by_email(&email)
      .await
      .map_err(|_| AccountError::InvalidCredentials)?;

    let password_hash =
      super::value_objects::PasswordHash::from_hash(account.password_hash.as_str())?;

    let is_valid = self.password_hasher.verify(&password, &password_hash).await?;
    if !is_valid {
      return Err(AccountError::InvalidCredentials);
    }

    let token = self.token_service.issue(&account.email, account.number)?;

    // Single-statement update: the token is either fully persisted or the
    // login fails before the client ever sees it.
    let updated = self.repo.record_login(&email, &token).await?;

    tracing::info!(account_id = updated.id, "login succeeded");

    Ok(updated)
  }

  /// Invalidates the session bound to `token`.
  ///
  /// The token itself must still validate structurally (it identifies the
  /// caller); revocation happens by clearing the stored copy, which orphans
  /// the presented token for every subsequent gate check.
  pub async fn logout(&self, token: &str) -> Result<(), AccountError> {
    self.token_service.validate(token)?;
    self.repo.clear_token(token).await?;

    tracing::info!("session revoked");

    Ok(())
  }

  /// Authorization check for a protected per-resource request.
  ///
  /// Validates the token, resolves the target account by path id and
  /// requires the presented token to equal the stored one byte-for-byte
  /// (plus the account-number claim to match). Every failure collapses into
  /// [`AccountError::TokenInvalid`] so a denial never reveals which step
  /// rejected the request.
  pub async fn authorize(&self, token: &str, account_id: i64) -> Result<Account, AccountError> {
    let claims = self.token_service.validate(token)?;

    let account = self
      .repo
      .get_by_id(account_id)
      .await
      .map_err(|_| AccountError::TokenInvalid)?;

    if !account.has_active_session() || account.token != token {
      return Err(AccountError::TokenInvalid);
    }

    if account.number != claims.account_number {
      return Err(AccountError::TokenInvalid);
    }

    Ok(account)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryAccountRepository;
  use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenService};

  fn service() -> AccountService {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::new().unwrap());
    let tokens = Arc::new(JwtTokenService::new("test-secret", 3600).unwrap());
    AccountService::new(repo, hasher, tokens)
  }

  async fn register_john(service: &AccountService) -> Account {
    service
      .register(
        "John".to_string(),
        "Doe".to_string(),
        Email::new("john@x.com").unwrap(),
        Password::new("secret").unwrap(),
      )
      .await
      .unwrap()
  }

  #[tokio::test]
  async fn test_register_assigns_id_and_issues_token() {
    let service = service();
    let account = register_john(&service).await;

    assert!(account.id > 0);
    assert!(account.has_active_session());
    assert_eq!(account.email, "john@x.com");
    assert_eq!(account.balance, 0);
  }

  #[tokio::test]
  async fn test_register_duplicate_email_fails() {
    let service = service();
    register_john(&service).await;

    let result = service
      .register(
        "Jane".to_string(),
        "Doe".to_string(),
        Email::new("john@x.com").unwrap(),
        Password::new("other-secret").unwrap(),
      )
      .await;

    assert!(matches!(result, Err(AccountError::DuplicateEmail(_))));
  }

  #[tokio::test]
  async fn test_login_persists_fresh_token() {
    let service = service();
    let created = register_john(&service).await;

    let logged_in = service
      .login(
        Email::new("john@x.com").unwrap(),
        Password::new("secret").unwrap(),
      )
      .await
      .unwrap();

    assert_eq!(logged_in.id, created.id);
    assert!(logged_in.has_active_session());

    // The stored token authorizes access to the account's own resource
    let authorized = service
      .authorize(&logged_in.token, logged_in.id)
      .await
      .unwrap();
    assert_eq!(authorized.id, created.id);
  }

  #[tokio::test]
  async fn test_login_fails_uniformly() {
    let service = service();
    register_john(&service).await;

    let wrong_password = service
      .login(
        Email::new("john@x.com").unwrap(),
        Password::new("wrong").unwrap(),
      )
      .await;
    let unknown_email = service
      .login(
        Email::new("nobody@x.com").unwrap(),
        Password::new("secret").unwrap(),
      )
      .await;

    assert!(matches!(
      wrong_password,
      Err(AccountError::InvalidCredentials)
    ));
    assert!(matches!(
      unknown_email,
      Err(AccountError::InvalidCredentials)
    ));
  }

  #[tokio::test]
  async fn test_logout_orphans_the_presented_token() {
    let service = service();
    let account = register_john(&service).await;
    let token = account.token.clone();

    service.logout(&token).await.unwrap();

    // Signature is still structurally valid, but the stored copy is gone
    let denied = service.authorize(&token, account.id).await;
    assert!(matches!(denied, Err(AccountError::TokenInvalid)));
  }

  #[tokio::test]
  async fn test_authorize_rejects_foreign_token() {
    let service = service();
    let john = register_john(&service).await;
    let jane = service
      .register(
        "Jane".to_string(),
        "Roe".to_string(),
        Email::new("jane@x.com").unwrap(),
        Password::new("secret2").unwrap(),
      )
      .await
      .unwrap();

    // Jane's token must not open John's resource
    let denied = service.authorize(&jane.token, john.id).await;
    assert!(matches!(denied, Err(AccountError::TokenInvalid)));
  }

  #[tokio::test]
  async fn test_authorize_rejects_garbage_and_missing_accounts() {
    let service = service();
    let account = register_john(&service).await;

    let garbage = service.authorize("not-a-token", account.id).await;
    assert!(matches!(garbage, Err(AccountError::TokenInvalid)));

    let missing = service.authorize(&account.token, 9999).await;
    assert!(matches!(missing, Err(AccountError::TokenInvalid)));
  }
}
