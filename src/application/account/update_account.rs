use std::sync::Arc;

use crate::domain::account::entities::Account;
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountRepository;

/// Command for updating an account's display attributes. Fields left `None`
/// keep their stored value; nothing else on an account is updatable.
#[derive(Debug, Clone)]
pub struct UpdateAccountCommand {
  pub id: i64,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
}

/// Use case for updating an account
pub struct UpdateAccountUseCase {
  repo: Arc<dyn AccountRepository>,
}

impl UpdateAccountUseCase {
  pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
    Self { repo }
  }

  /// # Errors
  /// Returns `AccountError::NotFound` when no account has this id.
  pub async fn execute(&self, command: UpdateAccountCommand) -> Result<Account, AccountError> {
    let mut account = self.repo.get_by_id(command.id).await?;
    account.rename(command.first_name, command.last_name);

    self.repo.update(account).await
  }
}
