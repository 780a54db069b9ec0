pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Account, AccountView, NewAccount};
pub use errors::{AccountError, AccountErrorKind, HashError, RepositoryError};
pub use ports::{CredentialStore, PasswordHasher};
pub use services::{AccountService, AccountServiceConfig};
pub use value_objects::{Email, Password, PasswordHash, ValueObjectError};
