use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{AccountResponse, LoginRequest, RegisterRequest},
  errors::ApiError,
};
use crate::application::account::{
  LoginAccountCommand, LoginAccountUseCase, RegisterAccountCommand, RegisterAccountUseCase,
};

/// Handler for account registration
///
/// POST /api/v1/account/register
/// Body: RegisterRequest (JSON)
/// Response: AccountResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterAccountUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let RegisterRequest { email, password } = request.into_inner();
  let response = use_case
    .execute(RegisterAccountCommand { email, password })
    .await?;

  Ok(HttpResponse::Created().json(AccountResponse {
    message: response.message,
    user: response.account.into(),
  }))
}

/// Handler for login
///
/// POST /api/v1/account/login
/// Body: LoginRequest (JSON)
/// Response: AccountResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginAccountUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let LoginRequest { email, password } = request.into_inner();
  let response = use_case
    .execute(LoginAccountCommand { email, password })
    .await?;

  Ok(HttpResponse::Ok().json(AccountResponse {
    message: response.message,
    user: response.account.into(),
  }))
}

/// Maps malformed JSON bodies to the same error shape as every other 400
pub fn json_error_handler(
  err: actix_web::error::JsonPayloadError,
  _req: &actix_web::HttpRequest,
) -> actix_web::Error {
  ApiError::Validation(err.to_string()).into()
}
