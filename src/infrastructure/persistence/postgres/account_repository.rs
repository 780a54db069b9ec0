use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{
  entities::{Account, NewAccount},
  errors::RepositoryError,
  ports::CredentialStore,
  value_objects::Email,
};

/// PostgreSQL implementation of the CredentialStore trait
pub struct PostgresCredentialStore {
  pool: PgPool,
}

impl PostgresCredentialStore {
  /// Creates a new instance of PostgresCredentialStore
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for accounts table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: Uuid,
  email: String,
  password_hash: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
  fn from(row: AccountRow) -> Self {
    Account::from_db(
      row.id,
      row.email,
      row.password_hash,
      row.created_at,
      row.updated_at,
    )
  }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
  async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn create(&self, account: NewAccount) -> Result<Account, RepositoryError> {
    let account = account.into_account();

    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            INSERT INTO accounts (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
    )
    .bind(account.id)
    .bind(&account.email)
    .bind(&account.password_hash)
    .bind(account.created_at)
    .bind(account.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn save(&self, account: Account) -> Result<Account, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            UPDATE accounts
            SET
                email = $2,
                password_hash = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
    )
    .bind(account.id)
    .bind(&account.email)
    .bind(&account.password_hash)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(RepositoryError::NotFound)
  }
}
