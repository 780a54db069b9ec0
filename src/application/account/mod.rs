//! Account use cases

mod login_account;
mod register_account;

pub use login_account::{LoginAccountCommand, LoginAccountResponse, LoginAccountUseCase};
pub use register_account::{
  RegisterAccountCommand, RegisterAccountResponse, RegisterAccountUseCase,
};
