//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: configuration loading,
//! persistence backends and security services.

pub mod config;
pub mod persistence;
pub mod security;
