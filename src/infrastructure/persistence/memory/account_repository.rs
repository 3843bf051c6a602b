use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::account::{
  entities::Account,
  errors::AccountError,
  ports::AccountRepository,
  value_objects::Email,
};

/// In-memory implementation of the AccountRepository trait.
///
/// An embedded alternative to the Postgres backend behind the same port; it
/// keeps the full repository contract (id assignment, unique email, NotFound
/// semantics) and doubles as the engine for service- and HTTP-level tests.
#[derive(Default)]
pub struct InMemoryAccountRepository {
  inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
  next_id: i64,
  accounts: Vec<Account>,
}

impl InMemoryAccountRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
  async fn create(&self, mut account: Account) -> Result<Account, AccountError> {
    let mut store = self.inner.lock().unwrap();

    if store.accounts.iter().any(|a| a.email == account.email) {
      return Err(AccountError::DuplicateEmail(account.email));
    }

    store.next_id += 1;
    account.id = store.next_id;
    store.accounts.push(account.clone());

    Ok(account)
  }

  async fn get_by_id(&self, id: i64) -> Result<Account, AccountError> {
    let store = self.inner.lock().unwrap();

    store
      .accounts
      .iter()
      .find(|a| a.id == id)
      .cloned()
      .ok_or(AccountError::NotFound)
  }

  async fn get_by_email(&self, email: &Email) -> Result<Account, AccountError> {
    let store = self.inner.lock().unwrap();

    store
      .accounts
      .iter()
      .find(|a| a.email == email.as_str())
      .cloned()
      .ok_or(AccountError::NotFound)
  }

  async fn list(&self) -> Result<Vec<Account>, AccountError> {
    let store = self.inner.lock().unwrap();

    // Insertion order, mirroring the relational backend's storage order
    Ok(store.accounts.clone())
  }

  async fn update(&self, account: Account) -> Result<Account, AccountError> {
    let mut store = self.inner.lock().unwrap();

    let stored = store
      .accounts
      .iter_mut()
      .find(|a| a.id == account.id)
      .ok_or(AccountError::NotFound)?;

    // Only display attributes are updatable
    stored.first_name = account.first_name;
    stored.last_name = account.last_name;

    Ok(stored.clone())
  }

  async fn delete(&self, id: i64) -> Result<(), AccountError> {
    let mut store = self.inner.lock().unwrap();

    let before = store.accounts.len();
    store.accounts.retain(|a| a.id != id);

    if store.accounts.len() == before {
      return Err(AccountError::NotFound);
    }

    Ok(())
  }

  async fn record_login(&self, email: &Email, token: &str) -> Result<Account, AccountError> {
    let mut store = self.inner.lock().unwrap();

    let stored = store
      .accounts
      .iter_mut()
      .find(|a| a.email == email.as_str())
      .ok_or(AccountError::NotFound)?;

    stored.record_login(token);

    Ok(stored.clone())
  }

  async fn clear_token(&self, token: &str) -> Result<(), AccountError> {
    let mut store = self.inner.lock().unwrap();

    for account in store.accounts.iter_mut() {
      if account.token == token {
        account.clear_token();
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_account(email: &str) -> Account {
    Account::new("John", "Doe", email, "hashed-password")
  }

  #[tokio::test]
  async fn test_create_assigns_sequential_ids() {
    let repo = InMemoryAccountRepository::new();

    let first = repo.create(sample_account("a@x.com")).await.unwrap();
    let second = repo.create(sample_account("b@x.com")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
  }

  #[tokio::test]
  async fn test_duplicate_email_rejected() {
    let repo = InMemoryAccountRepository::new();

    repo.create(sample_account("dup@x.com")).await.unwrap();
    let result = repo.create(sample_account("dup@x.com")).await;

    assert!(matches!(result, Err(AccountError::DuplicateEmail(_))));
    assert_eq!(repo.list().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_delete_twice_is_not_found() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(sample_account("gone@x.com")).await.unwrap();

    repo.delete(created.id).await.unwrap();
    assert!(matches!(
      repo.delete(created.id).await,
      Err(AccountError::NotFound)
    ));
    assert!(matches!(
      repo.get_by_id(created.id).await,
      Err(AccountError::NotFound)
    ));
  }

  #[tokio::test]
  async fn test_record_login_then_clear_token() {
    let repo = InMemoryAccountRepository::new();
    repo.create(sample_account("s@x.com")).await.unwrap();

    let email = Email::new("s@x.com").unwrap();
    let updated = repo.record_login(&email, "tok").await.unwrap();
    assert_eq!(updated.token, "tok");

    repo.clear_token("tok").await.unwrap();
    assert!(repo.get_by_email(&email).await.unwrap().token.is_empty());

    // Unknown token clears nothing and does not error
    repo.clear_token("other").await.unwrap();
  }

  #[tokio::test]
  async fn test_list_keeps_insertion_order() {
    let repo = InMemoryAccountRepository::new();
    repo.create(sample_account("a@x.com")).await.unwrap();
    repo.create(sample_account("b@x.com")).await.unwrap();

    let emails: Vec<String> = repo
      .list()
      .await
      .unwrap()
      .into_iter()
      .map(|a| a.email)
      .collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
  }

  #[tokio::test]
  async fn test_update_missing_account_is_not_found() {
    let repo = InMemoryAccountRepository::new();
    let ghost = sample_account("ghost@x.com");

    assert!(matches!(
      repo.update(ghost).await,
      Err(AccountError::NotFound)
    ));
  }
}
