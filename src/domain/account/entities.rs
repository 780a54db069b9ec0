use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Account entity, the stored identity record
#[derive(Debug, Clone)]
pub struct Account {
  /// Unique identifier, assigned by the credential store
  pub id: Uuid,
  /// Account email address (unique, stored as supplied)
  pub email: String,
  /// PHC-format password hash
  pub password_hash: String,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the account was last updated
  pub updated_at: DateTime<Utc>,
}

impl Account {
  /// Creates an account from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      email,
      password_hash,
      created_at,
      updated_at,
    }
  }

  /// The fields that may leave the service
  pub fn view(&self) -> AccountView {
    AccountView {
      id: self.id,
      email: self.email.clone(),
    }
  }
}

impl From<Account> for AccountView {
  fn from(account: Account) -> Self {
    Self {
      id: account.id,
      email: account.email,
    }
  }
}

/// Account data before the store has assigned an identity
#[derive(Debug, Clone)]
pub struct NewAccount {
  pub email: String,
  pub password_hash: String,
}

impl NewAccount {
  pub fn new(email: String, password_hash: String) -> Self {
    Self {
      email,
      password_hash,
    }
  }

  /// Materializes the record with a fresh id and timestamps
  pub fn into_account(self) -> Account {
    let now = Utc::now();
    Account {
      id: Uuid::new_v4(),
      email: self.email,
      password_hash: self.password_hash,
      created_at: now,
      updated_at: now,
    }
  }
}

/// Account as returned to callers, without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
  pub id: Uuid,
  pub email: String,
}
