use std::sync::Arc;

use crate::domain::account::entities::Account;
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountRepository;

/// Use case for listing all accounts
pub struct ListAccountsUseCase {
  repo: Arc<dyn AccountRepository>,
}

impl ListAccountsUseCase {
  pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
    Self { repo }
  }

  /// Returns all accounts in storage order.
  pub async fn execute(&self) -> Result<Vec<Account>, AccountError> {
    self.repo.list().await
  }
}
