use std::sync::Arc;

use crate::domain::account::entities::Account;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password};

/// Command for logging in to an account
#[derive(Debug, Clone)]
pub struct LoginCommand {
  pub email: String,
  pub password: String,
}

/// Use case for logging in to an account
pub struct LoginUseCase {
  account_service: Arc<AccountService>,
}

impl LoginUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the login use case, returning the account with its freshly
  /// persisted session token.
  ///
  /// # Errors
  /// Fails with `AccountError::InvalidCredentials` for a wrong password, an
  /// unknown email, or an email that does not even parse; a caller cannot
  /// tell those cases apart.
  pub async fn execute(&self, command: LoginCommand) -> Result<Account, AccountError> {
    let email = Email::new(command.email).map_err(|_| AccountError::InvalidCredentials)?;
    let password = Password::new(command.password).map_err(|_| AccountError::InvalidCredentials)?;

    self.account_service.login(email, password).await
  }
}
