//! Adapters layer
//!
//! Inbound adapters translating transport-level requests into application
//! use cases. Currently a single HTTP adapter built on actix-web.

pub mod http;
