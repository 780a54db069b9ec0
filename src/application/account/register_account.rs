use std::sync::Arc;

use crate::domain::account::entities::AccountView;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password};

/// Command for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
  /// Account email address
  pub email: String,
  /// Plain text password, hashed before storage
  pub password: String,
}

/// Response after successful registration
#[derive(Debug, Clone)]
pub struct RegisterAccountResponse {
  pub message: String,
  pub account: AccountView,
}

/// Use case for registering a new account
pub struct RegisterAccountUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterAccountUseCase {
  /// Creates a new instance of RegisterAccountUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the registration use case
  ///
  /// # Errors
  /// Returns `AccountError` if the input is rejected, the email is taken, or
  /// storage/hashing fails
  pub async fn execute(
    &self,
    command: RegisterAccountCommand,
  ) -> Result<RegisterAccountResponse, AccountError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let account = self.account_service.register(email, password).await?;

    Ok(RegisterAccountResponse {
      message: "User registered successfully".to_string(),
      account,
    })
  }
}
