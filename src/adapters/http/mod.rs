pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  CreateAccountRequest, ErrorResponse, LoginRequest, MessageResponse, TransferRequest,
  TransferResponse, UpdateAccountRequest,
};
pub use errors::{ApiError, json_error_handler, path_error_handler};
pub use middleware::{AccountAuthMiddleware, AuthenticatedAccount, RequestIdMiddleware, TOKEN_HEADER};
pub use routes::{
  AccountRouteDependencies, configure_account_routes, configure_auth_routes,
  configure_transfer_routes,
};
