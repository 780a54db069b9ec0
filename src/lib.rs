//! userbase: account registration and login over HTTP
//!
//! - `domain`: the account entity, credential store port and account service
//! - `application`: register/login use cases
//! - `adapters::http`: actix-web handlers, DTOs and error mapping
//! - `infrastructure`: configuration, Argon2 hashing, PostgreSQL and in-memory stores

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
