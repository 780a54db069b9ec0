use actix_web::web;
use std::sync::Arc;

use crate::application::account::{LoginAccountUseCase, RegisterAccountUseCase};

use super::handlers::account::{json_error_handler, login_handler, register_handler};

/// Configure account routes
///
/// Mounts the account endpoints under the provided scope
/// (e.g. `/api/v1/account`).
///
/// # Routes
///
/// - POST /register - Register a new account
/// - POST /login - Check credentials and return the account
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use userbase::application::account::*;
/// # use userbase::adapters::http::routes::configure_account_routes;
///
/// # fn example(
/// #   register_use_case: Arc<RegisterAccountUseCase>,
/// #   login_use_case: Arc<LoginAccountUseCase>,
/// # ) {
/// let app = App::new().service(
///   web::scope("/api/v1/account")
///     .configure(|cfg| configure_account_routes(cfg, register_use_case, login_use_case)),
/// );
/// # }
/// ```
pub fn configure_account_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterAccountUseCase>,
  login_use_case: Arc<LoginAccountUseCase>,
) {
  cfg
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(login_use_case))
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler));
}
