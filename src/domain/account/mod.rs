pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::Account;
pub use errors::{AccountError, HashError, RepositoryError, TokenError, ValidationError};
pub use ports::{AccountRepository, PasswordHasher, SessionClaims, TokenService};
pub use services::AccountService;
pub use value_objects::{Email, Password, PasswordHash};
