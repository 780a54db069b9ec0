use async_trait::async_trait;

use super::entities::{Account, NewAccount};
use super::errors::{HashError, RepositoryError};
use super::value_objects::{Email, Password, PasswordHash};

/// Persistence port for account records
#[async_trait]
pub trait CredentialStore: Send + Sync {
  /// Finds an account by its exact email
  async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError>;

  /// Persists a new account, assigning its id and timestamps
  ///
  /// Returns `RepositoryError::DuplicateKey` if the email is already taken.
  async fn create(&self, account: NewAccount) -> Result<Account, RepositoryError>;

  /// Writes back changes to an existing account
  async fn save(&self, account: Account) -> Result<Account, RepositoryError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, HashError>;
}
