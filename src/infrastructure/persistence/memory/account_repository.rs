use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::account::{
  entities::{Account, NewAccount},
  errors::RepositoryError,
  ports::CredentialStore,
  value_objects::Email,
};

/// Process-local credential store
///
/// Records are keyed by id with a unique email index beside them. Both maps
/// sit behind one lock, so the uniqueness check and the insert are atomic,
/// which gives the same guarantee as the unique index in PostgreSQL.
#[derive(Default)]
pub struct InMemoryCredentialStore {
  inner: RwLock<Accounts>,
}

#[derive(Default)]
struct Accounts {
  by_id: HashMap<Uuid, Account>,
  id_by_email: HashMap<String, Uuid>,
}

impl Accounts {
  fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
    self
      .id_by_email
      .get(email)
      .is_some_and(|id| Some(*id) != except)
  }
}

impl InMemoryCredentialStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored accounts
  pub async fn len(&self) -> usize {
    self.inner.read().await.by_id.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.inner.read().await.by_id.is_empty()
  }
}

fn duplicate(email: &str) -> RepositoryError {
  RepositoryError::DuplicateKey(format!("email {} already exists", email))
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
  async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
    let accounts = self.inner.read().await;

    Ok(
      accounts
        .id_by_email
        .get(email.as_str())
        .and_then(|id| accounts.by_id.get(id))
        .cloned(),
    )
  }

  async fn create(&self, account: NewAccount) -> Result<Account, RepositoryError> {
    let mut accounts = self.inner.write().await;

    if accounts.email_taken(&account.email, None) {
      return Err(duplicate(&account.email));
    }

    let account = account.into_account();
    accounts
      .id_by_email
      .insert(account.email.clone(), account.id);
    accounts.by_id.insert(account.id, account.clone());

    Ok(account)
  }

  async fn save(&self, mut account: Account) -> Result<Account, RepositoryError> {
    let mut accounts = self.inner.write().await;

    let Some(previous_email) = accounts.by_id.get(&account.id).map(|a| a.email.clone()) else {
      return Err(RepositoryError::NotFound);
    };

    if accounts.email_taken(&account.email, Some(account.id)) {
      return Err(duplicate(&account.email));
    }

    if previous_email != account.email {
      accounts.id_by_email.remove(&previous_email);
      accounts
        .id_by_email
        .insert(account.email.clone(), account.id);
    }

    account.updated_at = Utc::now();
    accounts.by_id.insert(account.id, account.clone());

    Ok(account)
  }
}
