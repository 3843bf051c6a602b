use crate::domain::account::errors::AccountError;

/// Command for submitting a transfer request
#[derive(Debug, Clone)]
pub struct TransferCommand {
  pub to_account: i64,
  pub amount: i64,
}

/// Receipt echoing an accepted transfer request. No balance is mutated:
/// applying transfers to the ledger is explicitly out of scope.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
  pub to_account: i64,
  pub amount: i64,
}

/// Use case for accepting (but not processing) a transfer request
#[derive(Default)]
pub struct TransferUseCase;

impl TransferUseCase {
  pub fn new() -> Self {
    Self
  }

  /// Records the request in the log and echoes it back unprocessed.
  pub async fn execute(&self, command: TransferCommand) -> Result<TransferReceipt, AccountError> {
    tracing::info!(
      to_account = command.to_account,
      amount = command.amount,
      "transfer request accepted (not processed)"
    );

    Ok(TransferReceipt {
      to_account: command.to_account,
      amount: command.amount,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_transfer_echoes_request() {
    let use_case = TransferUseCase::new();

    let receipt = use_case
      .execute(TransferCommand {
        to_account: 42,
        amount: 1000,
      })
      .await
      .unwrap();

    assert_eq!(receipt.to_account, 42);
    assert_eq!(receipt.amount, 1000);
  }
}
