//! Application layer
//!
//! Use cases that turn raw commands into validated domain values and hand
//! them to the account service.

pub mod account;
