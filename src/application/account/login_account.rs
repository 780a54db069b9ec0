use std::sync::Arc;

use crate::domain::account::entities::AccountView;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password};

/// Command for logging in
#[derive(Debug, Clone)]
pub struct LoginAccountCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful login
#[derive(Debug, Clone)]
pub struct LoginAccountResponse {
  pub message: String,
  pub account: AccountView,
}

/// Use case for logging in an account
pub struct LoginAccountUseCase {
  account_service: Arc<AccountService>,
}

impl LoginAccountUseCase {
  /// Creates a new instance of LoginAccountUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the login use case
  ///
  /// # Errors
  /// Returns `AccountError::InvalidCredentials` for an unknown email or a
  /// wrong password, without saying which
  pub async fn execute(
    &self,
    command: LoginAccountCommand,
  ) -> Result<LoginAccountResponse, AccountError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let account = self.account_service.login(email, password).await?;

    Ok(LoginAccountResponse {
      message: "Login successful".to_string(),
      account,
    })
  }
}
