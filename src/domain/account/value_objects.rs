use argon2::PasswordHash as Argon2PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Email is required")]
  EmailEmpty,

  #[error("Email is too long (maximum {max} characters)")]
  EmailTooLong { max: usize },

  #[error("Password is required")]
  PasswordEmpty,

  #[error("Password is too long (maximum {max} characters)")]
  PasswordTooLong { max: usize },

  #[error("Invalid password hash format")]
  InvalidPasswordHash,
}

// ============================================================================
// Email Value Object
// ============================================================================

/// Account email, kept exactly as supplied.
///
/// No case folding or trimming is applied, so `A@x.com` and `a@x.com` name
/// two different accounts. Format checks belong to the HTTP layer; this type
/// only rejects values no store should ever see.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  pub const MAX_LENGTH: usize = 254;

  /// Creates a new Email after validation
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email = email.into();

    if email.is_empty() {
      return Err(ValueObjectError::EmailEmpty);
    }

    if email.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::EmailTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(email))
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  pub const MAX_LENGTH: usize = 128;

  /// Creates a new Password after validation
  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValueObjectError::PasswordEmpty);
    }

    if password.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::PasswordTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Length in characters
  pub fn len(&self) -> usize {
    self.0.chars().count()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (PHC string)
// ============================================================================

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Creates a new PasswordHash from an existing PHC hash string
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValueObjectError> {
    let hash = hash.into();

    Argon2PasswordHash::new(&hash).map_err(|_| ValueObjectError::InvalidPasswordHash)?;

    Ok(Self(hash))
  }

  /// Returns the hash as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

// The hash is not secret in the same way a password is, but it still has no
// business in log lines.
impl fmt::Debug for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("PasswordHash(***)")
  }
}
