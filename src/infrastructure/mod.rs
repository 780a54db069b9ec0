//! Infrastructure layer
//!
//! Concrete adapters for the domain ports: configuration loading, password
//! hashing, and credential storage.

pub mod config;
pub mod persistence;
pub mod security;
