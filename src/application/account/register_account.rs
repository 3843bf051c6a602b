use std::sync::Arc;

use crate::domain::account::entities::Account;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password};

/// Command for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
  pub first_name: String,
  pub last_name: String,
  /// Email address (plain text, validated here)
  pub email: String,
  /// Password (plain text, hashed by the service)
  pub password: String,
}

/// Use case for registering a new account
pub struct RegisterAccountUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterAccountUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the registration use case.
  ///
  /// # Errors
  /// Returns `AccountError::Validation` for malformed input and
  /// `AccountError::DuplicateEmail` when the address is already registered.
  pub async fn execute(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    self
      .account_service
      .register(command.first_name, command.last_name, email, password)
      .await
  }
}
