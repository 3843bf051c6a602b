//! Application layer
//!
//! This layer contains use cases that orchestrate domain logic to implement
//! application-specific workflows. Use cases coordinate the domain service,
//! the repository and other components to fulfill business requirements.

pub mod account;
