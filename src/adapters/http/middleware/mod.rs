pub mod auth;
pub mod request_id;

// Re-export middleware components for easier access
pub use auth::{AccountAuthMiddleware, AuthenticatedAccount, TOKEN_HEADER};
pub use request_id::{RequestId, RequestIdMiddleware};
