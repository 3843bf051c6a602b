use std::sync::Arc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountRepository;

/// Use case for hard-deleting an account
pub struct DeleteAccountUseCase {
  repo: Arc<dyn AccountRepository>,
}

impl DeleteAccountUseCase {
  pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
    Self { repo }
  }

  /// # Errors
  /// Deleting a missing id returns `AccountError::NotFound`; repeating a
  /// delete is a client error, never a crash.
  pub async fn execute(&self, id: i64) -> Result<(), AccountError> {
    self.repo.delete(id).await?;

    tracing::info!(account_id = id, "account deleted");

    Ok(())
  }
}
