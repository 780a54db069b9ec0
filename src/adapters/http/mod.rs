pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{AccountResponse, ErrorResponse, LoginRequest, RegisterRequest, UserResponse};
pub use errors::{ApiError, FieldErrors};
pub use handlers::account::{login_handler, register_handler};
pub use handlers::health_check;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::configure_account_routes;
