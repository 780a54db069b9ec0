use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::account::entities::AccountView;

/// Request for account registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(
    email(message = "Invalid email format"),
    length(max = 254, message = "Email must be at most 254 characters")
  )]
  pub email: String,

  /// Strength policy (minimum length) is applied by the account service
  #[validate(length(
    min = 1,
    max = 128,
    message = "Password must be between 1 and 128 characters"
  ))]
  pub password: String,
}

/// Request for login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Account fields returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
  pub id: Uuid,
  pub email: String,
}

impl From<AccountView> for UserResponse {
  fn from(view: AccountView) -> Self {
    Self {
      id: view.id,
      email: view.email,
    }
  }
}

/// Response body for successful register and login calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
  pub message: String,
  pub user: UserResponse,
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
