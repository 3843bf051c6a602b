use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::account::{
  entities::Account,
  errors::{AccountError, RepositoryError},
  ports::AccountRepository,
  value_objects::Email,
};

const ACCOUNT_COLUMNS: &str =
  "id, first_name, last_name, email, password_hash, token, number, balance, created_at";

/// PostgreSQL implementation of the AccountRepository trait
pub struct PostgresAccountRepository {
  pool: PgPool,
}

impl PostgresAccountRepository {
  /// Creates a new instance of PostgresAccountRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Creates the accounts table if it does not exist yet. This is the whole
  /// schema story: there are no further migrations in scope.
  pub async fn ensure_schema(pool: &PgPool) -> Result<(), AccountError> {
    sqlx::query(
      r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                token TEXT NOT NULL DEFAULT '',
                number BIGINT NOT NULL,
                balance BIGINT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
    )
    .execute(pool)
    .await?;

    Ok(())
  }
}

/// Database row structure for the accounts table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: i64,
  first_name: String,
  last_name: String,
  email: String,
  password_hash: String,
  token: String,
  number: i64,
  balance: i64,
  created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
  fn from(row: AccountRow) -> Self {
    Account {
      id: row.id,
      first_name: row.first_name,
      last_name: row.last_name,
      email: row.email,
      password_hash: row.password_hash,
      token: row.token,
      number: row.number,
      balance: row.balance,
      created_at: row.created_at,
    }
  }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
  async fn create(&self, account: Account) -> Result<Account, AccountError> {
    let result = sqlx::query_as::<_, AccountRow>(&format!(
      r#"
            INSERT INTO accounts (
                first_name,
                last_name,
                email,
                password_hash,
                token,
                number,
                balance,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ACCOUNT_COLUMNS}
            "#
    ))
    .bind(&account.first_name)
    .bind(&account.last_name)
    .bind(&account.email)
    .bind(&account.password_hash)
    .bind(&account.token)
    .bind(account.number)
    .bind(account.balance)
    .bind(account.created_at)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => Ok(row.into()),
      Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
        Err(AccountError::DuplicateEmail(account.email))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn get_by_id(&self, id: i64) -> Result<Account, AccountError> {
    let row = sqlx::query_as::<_, AccountRow>(&format!(
      "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
  }

  async fn get_by_email(&self, email: &Email) -> Result<Account, AccountError> {
    let row = sqlx::query_as::<_, AccountRow>(&format!(
      "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
    ))
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
  }

  async fn list(&self) -> Result<Vec<Account>, AccountError> {
    // Storage order; callers get no sort contract
    let rows = sqlx::query_as::<_, AccountRow>(&format!(
      "SELECT {ACCOUNT_COLUMNS} FROM accounts"
    ))
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn update(&self, account: Account) -> Result<Account, AccountError> {
    let row = sqlx::query_as::<_, AccountRow>(&format!(
      r#"
            UPDATE accounts
            SET first_name = $2, last_name = $3
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
    ))
    .bind(account.id)
    .bind(&account.first_name)
    .bind(&account.last_name)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
  }

  async fn delete(&self, id: i64) -> Result<(), AccountError> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(AccountError::NotFound);
    }

    Ok(())
  }

  async fn record_login(&self, email: &Email, token: &str) -> Result<Account, AccountError> {
    // One statement: the token is persisted atomically or not at all
    let row = sqlx::query_as::<_, AccountRow>(&format!(
      r#"
            UPDATE accounts
            SET token = $2
            WHERE email = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
    ))
    .bind(email.as_str())
    .bind(token)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
  }

  async fn clear_token(&self, token: &str) -> Result<(), AccountError> {
    sqlx::query("UPDATE accounts SET token = '' WHERE token = $1")
      .bind(token)
      .execute(&self.pool)
      .await?;

    Ok(())
  }
}
