//! Account use cases
//!
//! One use case per operation on the HTTP surface; each orchestrates the
//! domain service or the repository port directly.

mod delete_account;
mod list_accounts;
mod login;
mod logout;
mod register_account;
mod transfer;
mod update_account;

pub use delete_account::DeleteAccountUseCase;
pub use list_accounts::ListAccountsUseCase;
pub use login::{LoginCommand, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register_account::{RegisterAccountCommand, RegisterAccountUseCase};
pub use transfer::{TransferCommand, TransferReceipt, TransferUseCase};
pub use update_account::{UpdateAccountCommand, UpdateAccountUseCase};
