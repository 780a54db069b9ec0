use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::account::errors::{AccountError, AccountErrorKind};

use super::dtos::ErrorResponse;

/// Validator messages keyed by request field
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Request fields rejected by validator (400 Bad Request), reported per field
  InvalidFields(FieldErrors),

  /// Email already registered (409 Conflict)
  DuplicateEmail,

  /// Unknown email or wrong password (401 Unauthorized)
  InvalidCredentials,

  /// Internal server error (500), the string is logged and never sent
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::InvalidFields(fields) => {
        write!(f, "Validation error: {}", field_messages(fields))
      }
      ApiError::DuplicateEmail => write!(f, "Email already exists"),
      ApiError::InvalidCredentials => write!(f, "Invalid email or password"),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) | ApiError::InvalidFields(_) => StatusCode::BAD_REQUEST,
      ApiError::DuplicateEmail => StatusCode::CONFLICT,
      ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (error_type, message, details) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone(), None),
      ApiError::InvalidFields(fields) => (
        "validation_error",
        field_messages(fields),
        serde_json::to_value(fields).ok(),
      ),
      ApiError::DuplicateEmail => (
        "email_already_exists",
        "Email already exists".to_string(),
        None,
      ),
      ApiError::InvalidCredentials => (
        "invalid_credentials",
        "Invalid email or password".to_string(),
        None,
      ),
      ApiError::Internal(msg) => {
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
          None,
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details,
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(error_response)
  }
}

impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    match error.kind() {
      AccountErrorKind::InvalidInput => ApiError::Validation(error.to_string()),
      AccountErrorKind::DuplicateEmail => ApiError::DuplicateEmail,
      AccountErrorKind::InvalidCredentials => ApiError::InvalidCredentials,
      AccountErrorKind::InternalFailure => ApiError::Internal(error.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let fields: FieldErrors = errors
      .field_errors()
      .into_iter()
      .map(|(field, errors)| {
        let messages: Vec<String> = errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect();
        (field.to_string(), messages)
      })
      .collect();

    ApiError::InvalidFields(fields)
  }
}

/// Flattens per-field messages into one sorted summary line
fn field_messages(fields: &FieldErrors) -> String {
  let mut messages: Vec<&str> = fields.values().flatten().map(String::as_str).collect();
  messages.sort_unstable();
  messages.join(", ")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::errors::RepositoryError;
  use actix_web::body::to_bytes;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::InvalidCredentials.status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(ApiError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_account_error_conversion() {
    let api_error: ApiError = AccountError::InvalidCredentials.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);

    let api_error: ApiError = AccountError::DuplicateEmail.into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = AccountError::PasswordTooShort { min: 8 }.into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_field_errors_are_reported_per_field() {
    let mut errors = validator::ValidationErrors::new();
    let mut email_error = validator::ValidationError::new("email");
    email_error.message = Some("Invalid email format".into());
    errors.add("email", email_error);
    let mut password_error = validator::ValidationError::new("length");
    password_error.message = Some("Password is required".into());
    errors.add("password", password_error);

    let api_error = ApiError::from(errors);
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let body = to_bytes(api_error.error_response().into_body())
      .await
      .unwrap();
    let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(body.error, "validation_error");
    assert_eq!(body.message, "Invalid email format, Password is required");
    assert_eq!(
      body.details,
      Some(serde_json::json!({
        "email": ["Invalid email format"],
        "password": ["Password is required"],
      }))
    );
  }

  #[actix_web::test]
  async fn test_internal_error_detail_is_not_leaked() {
    let api_error: ApiError =
      AccountError::from(RepositoryError::DatabaseError("relation \"accounts\" missing".into()))
        .into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(api_error.error_response().into_body())
      .await
      .unwrap();
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("internal_error"));
    assert!(!body.contains("relation"));
  }
}
