use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::account::errors::HashError;
use crate::domain::account::ports::PasswordHasher;
use crate::domain::account::value_objects::{Password, PasswordHash};

/// Argon2id work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
  /// Memory cost in KiB
  pub memory_cost_kib: u32,
  /// Number of iterations
  pub time_cost: u32,
  /// Degree of parallelism
  pub parallelism: u32,
}

impl HashingParams {
  pub fn new(memory_cost_kib: u32, time_cost: u32, parallelism: u32) -> Self {
    Self {
      memory_cost_kib,
      time_cost,
      parallelism,
    }
  }
}

impl Default for HashingParams {
  /// 19 MiB, 2 iterations, 1 lane
  fn default() -> Self {
    Self::new(19456, 2, 1)
  }
}

/// Argon2id password hasher implementation
///
/// Hashing and verification are CPU-bound, so both run on tokio's
/// blocking pool instead of the async worker that received the request.
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a new Argon2PasswordHasher with the given work factor
  pub fn new(params: HashingParams) -> Result<Self, HashError> {
    let params = Params::new(
      params.memory_cost_kib,
      params.time_cost,
      params.parallelism,
      Some(32),
    )
    .map_err(|e| HashError::InvalidParams(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();

    let phc = tokio::task::spawn_blocking(move || {
      let salt = SaltString::generate(&mut rand::rngs::OsRng);

      argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HashError::HashingFailed(e.to_string()))
    })
    .await
    .map_err(|e| HashError::HashingFailed(format!("Hashing task failed: {}", e)))??;

    PasswordHash::from_hash(phc)
      .map_err(|e| HashError::HashingFailed(format!("Invalid hash format: {}", e)))
  }

  /// Verifies a password; the comparison inside argon2 is constant-time
  ///
  /// * `Ok(true)` - the password matches
  /// * `Ok(false)` - the password does not match
  /// * `Err(HashError)` - the stored hash could not be used
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, HashError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();
    let hashed_password = hashed_password.clone();

    tokio::task::spawn_blocking(move || {
      let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
        .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

      match argon2.verify_password(password.as_str().as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashError::VerificationFailed(e.to_string())),
      }
    })
    .await
    .map_err(|e| HashError::VerificationFailed(format!("Verification task failed: {}", e)))?
  }
}
