//! Minimal bank-account REST service.
//!
//! Layers follow a ports-and-adapters split: `domain` holds the account
//! entity, ports and the authentication service, `application` exposes one
//! use case per operation, `infrastructure` provides the Postgres and
//! in-memory repositories plus the Argon2 hasher and JWT token service, and
//! `adapters::http` carries the actix-web surface.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
