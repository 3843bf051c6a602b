use std::sync::Arc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;

/// Use case for logging out of an account session
pub struct LogoutUseCase {
  account_service: Arc<AccountService>,
}

impl LogoutUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Invalidates the session bound to `token`.
  ///
  /// # Errors
  /// Returns `AccountError::TokenInvalid` when the presented token does not
  /// validate.
  pub async fn execute(&self, token: &str) -> Result<(), AccountError> {
    self.account_service.logout(token).await
  }
}
