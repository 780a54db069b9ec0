use std::sync::Arc;

use super::entities::{AccountView, NewAccount};
use super::errors::{AccountError, RepositoryError};
use super::ports::{CredentialStore, PasswordHasher};
use super::value_objects::{Email, Password, PasswordHash};

const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Tunables for [`AccountService`]
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
  /// Minimum password length accepted at registration
  pub password_min_length: usize,
}

impl Default for AccountServiceConfig {
  fn default() -> Self {
    Self {
      password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
    }
  }
}

/// Account service implementing registration and login
pub struct AccountService {
  store: Arc<dyn CredentialStore>,
  password_hasher: Arc<dyn PasswordHasher>,
  config: AccountServiceConfig,
}

impl AccountService {
  /// Creates a new instance of AccountService
  pub fn new(
    store: Arc<dyn CredentialStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    config: AccountServiceConfig,
  ) -> Self {
    Self {
      store,
      password_hasher,
      config,
    }
  }

  /// Registers a new account with email and password
  ///
  /// # Errors
  /// - `AccountError::PasswordTooShort` if the password is under the configured minimum
  /// - `AccountError::DuplicateEmail` if the email is already registered
  /// - `AccountError::Repository` / `AccountError::Hash` on unexpected failures
  pub async fn register(
    &self,
    email: Email,
    password: Password,
  ) -> Result<AccountView, AccountError> {
    if password.len() < self.config.password_min_length {
      return Err(AccountError::PasswordTooShort {
        min: self.config.password_min_length,
      });
    }

    if self.store.find_by_email(&email).await?.is_some() {
      tracing::info!(email = %email, "Registration rejected: email already exists");
      return Err(AccountError::DuplicateEmail);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    // The pre-check above races with concurrent registrations; the store's
    // unique constraint is the authoritative answer.
    let account = match self
      .store
      .create(NewAccount::new(
        email.into_inner(),
        password_hash.into_inner(),
      ))
      .await
    {
      Ok(account) => account,
      Err(RepositoryError::DuplicateKey(detail)) => {
        tracing::info!(detail = %detail, "Registration lost uniqueness race");
        return Err(AccountError::DuplicateEmail);
      }
      Err(e) => return Err(e.into()),
    };

    tracing::info!(account_id = %account.id, "Account registered");

    Ok(account.into())
  }

  /// Authenticates an account by email and password
  ///
  /// Unknown email and wrong password both yield `AccountError::InvalidCredentials`.
  pub async fn login(&self, email: Email, password: Password) -> Result<AccountView, AccountError> {
    let Some(account) = self.store.find_by_email(&email).await? else {
      tracing::warn!("Login failed: invalid credentials");
      return Err(AccountError::InvalidCredentials);
    };

    let stored_hash = PasswordHash::from_hash(account.password_hash.as_str()).map_err(|e| {
      RepositoryError::CorruptRecord(format!("account {} password_hash: {}", account.id, e))
    })?;

    if !self.password_hasher.verify(&password, &stored_hash).await? {
      tracing::warn!("Login failed: invalid credentials");
      return Err(AccountError::InvalidCredentials);
    }

    tracing::info!(account_id = %account.id, "Login successful");

    Ok(account.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::entities::Account;
  use crate::domain::account::errors::AccountErrorKind;
  use crate::infrastructure::persistence::memory::InMemoryCredentialStore;
  use crate::infrastructure::security::{Argon2PasswordHasher, HashingParams};
  use async_trait::async_trait;

  fn fast_hasher() -> Arc<dyn PasswordHasher> {
    Arc::new(Argon2PasswordHasher::new(HashingParams::new(1024, 1, 1)).unwrap())
  }

  fn service_with(store: Arc<dyn CredentialStore>) -> AccountService {
    AccountService::new(store, fast_hasher(), AccountServiceConfig::default())
  }

  fn email(s: &str) -> Email {
    Email::new(s).unwrap()
  }

  fn password(s: &str) -> Password {
    Password::new(s).unwrap()
  }

  /// Store that always fails, to exercise internal failure paths
  struct UnreachableStore;

  #[async_trait]
  impl CredentialStore for UnreachableStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<Account>, RepositoryError> {
      Err(RepositoryError::ConnectionFailed(
        "connection refused".to_string(),
      ))
    }

    async fn create(&self, _account: NewAccount) -> Result<Account, RepositoryError> {
      Err(RepositoryError::ConnectionFailed(
        "connection refused".to_string(),
      ))
    }

    async fn save(&self, _account: Account) -> Result<Account, RepositoryError> {
      Err(RepositoryError::ConnectionFailed(
        "connection refused".to_string(),
      ))
    }
  }

  /// Store whose pre-check never sees the competing registration
  struct RacingStore;

  #[async_trait]
  impl CredentialStore for RacingStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<Account>, RepositoryError> {
      Ok(None)
    }

    async fn create(&self, _account: NewAccount) -> Result<Account, RepositoryError> {
      Err(RepositoryError::DuplicateKey(
        "accounts_email_key".to_string(),
      ))
    }

    async fn save(&self, account: Account) -> Result<Account, RepositoryError> {
      Ok(account)
    }
  }

  #[tokio::test]
  async fn test_register_returns_view() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store.clone());

    let view = service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap();

    assert_eq!(view.email, "a@x.com");
    assert_eq!(store.len().await, 1);

    let stored = store.find_by_email(&email("a@x.com")).await.unwrap().unwrap();
    assert_eq!(stored.id, view.id);
    assert_ne!(stored.password_hash, "secret123");
    assert!(stored.password_hash.starts_with("$argon2id$"));
  }

  #[tokio::test]
  async fn test_register_duplicate_email() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store.clone());

    service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap();
    let err = service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap_err();

    assert_eq!(err.kind(), AccountErrorKind::DuplicateEmail);
    assert_eq!(err.to_string(), "Email already exists");
    assert_eq!(store.len().await, 1);
  }

  #[tokio::test]
  async fn test_register_email_case_is_preserved() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store.clone());

    service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap();
    let view = service
      .register(email("A@x.com"), password("secret123"))
      .await
      .unwrap();

    assert_eq!(view.email, "A@x.com");
    assert_eq!(store.len().await, 2);
  }

  #[tokio::test]
  async fn test_register_short_password() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store.clone());

    let err = service
      .register(email("a@x.com"), password("short"))
      .await
      .unwrap_err();

    assert!(matches!(err, AccountError::PasswordTooShort { min: 8 }));
    assert_eq!(err.kind(), AccountErrorKind::InvalidInput);
    assert!(store.is_empty().await);
  }

  #[tokio::test]
  async fn test_register_minimum_counts_characters() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store.clone());

    let err = service
      .register(email("a@x.com"), password("éééé"))
      .await
      .unwrap_err();
    assert!(matches!(err, AccountError::PasswordTooShort { min: 8 }));

    service
      .register(email("a@x.com"), password("éééééééé"))
      .await
      .unwrap();
    assert_eq!(store.len().await, 1);
  }

  #[tokio::test]
  async fn test_register_unique_violation_maps_to_duplicate() {
    let service = service_with(Arc::new(RacingStore));

    let err = service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap_err();

    assert_eq!(err.kind(), AccountErrorKind::DuplicateEmail);
  }

  #[tokio::test]
  async fn test_register_store_failure_is_internal() {
    let service = service_with(Arc::new(UnreachableStore));

    let err = service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap_err();

    assert_eq!(err.kind(), AccountErrorKind::InternalFailure);
  }

  #[tokio::test]
  async fn test_login_success() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store);

    let registered = service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap();
    let logged_in = service
      .login(email("a@x.com"), password("secret123"))
      .await
      .unwrap();

    assert_eq!(registered, logged_in);
  }

  #[tokio::test]
  async fn test_login_failures_are_indistinguishable() {
    let store = Arc::new(InMemoryCredentialStore::new());
    let service = service_with(store);

    service
      .register(email("a@x.com"), password("secret123"))
      .await
      .unwrap();

    let wrong_password = service
      .login(email("a@x.com"), password("wrong"))
      .await
      .unwrap_err();
    let unknown_email = service
      .login(email("nouser@x.com"), password("x"))
      .await
      .unwrap_err();

    assert_eq!(wrong_password.kind(), AccountErrorKind::InvalidCredentials);
    assert_eq!(unknown_email.kind(), AccountErrorKind::InvalidCredentials);
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(wrong_password.to_string(), "Invalid email or password");
  }

  #[tokio::test]
  async fn test_login_corrupt_hash_is_internal() {
    let store = Arc::new(InMemoryCredentialStore::new());
    store
      .create(NewAccount::new(
        "a@x.com".to_string(),
        "plaintext-oops".to_string(),
      ))
      .await
      .unwrap();
    let service = service_with(store);

    let err = service
      .login(email("a@x.com"), password("plaintext-oops"))
      .await
      .unwrap_err();

    assert_eq!(err.kind(), AccountErrorKind::InternalFailure);
  }

  #[tokio::test]
  async fn test_login_store_failure_is_internal() {
    let service = service_with(Arc::new(UnreachableStore));

    let err = service
      .login(email("a@x.com"), password("secret123"))
      .await
      .unwrap_err();

    assert_eq!(err.kind(), AccountErrorKind::InternalFailure);
  }
}
