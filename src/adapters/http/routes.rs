use actix_web::web;
use std::sync::Arc;

use crate::application::account::{
  DeleteAccountUseCase, ListAccountsUseCase, LoginUseCase, LogoutUseCase, RegisterAccountUseCase,
  TransferUseCase, UpdateAccountUseCase,
};
use crate::domain::account::services::AccountService;

use super::handlers::accounts::{
  create_account_handler, delete_account_handler, get_account_handler, list_accounts_handler,
  update_account_handler,
};
use super::handlers::auth::{login_handler, logout_handler};
use super::handlers::transfer::transfer_handler;
use super::middleware::AccountAuthMiddleware;

/// Use cases shared by the account routes.
#[derive(Clone)]
pub struct AccountRouteDependencies {
  pub register_use_case: Arc<RegisterAccountUseCase>,
  pub list_use_case: Arc<ListAccountsUseCase>,
  pub update_use_case: Arc<UpdateAccountUseCase>,
  pub delete_use_case: Arc<DeleteAccountUseCase>,
  /// Drives the auth gate wrapped around `/account/{id}`
  pub account_service: Arc<AccountService>,
}

/// Configure account routes
///
/// # Routes
///
/// - GET  /account — list all accounts (public)
/// - POST /account — register a new account (public)
/// - GET    /account/{id} — fetch one account (auth gate)
/// - DELETE /account/{id} — delete an account (auth gate)
/// - PATCH/PUT /account/{id} — update display attributes (auth gate)
pub fn configure_account_routes(cfg: &mut web::ServiceConfig, deps: AccountRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.list_use_case))
    .app_data(web::Data::new(deps.update_use_case))
    .app_data(web::Data::new(deps.delete_use_case))
    .service(
      web::resource("/account")
        .route(web::get().to(list_accounts_handler))
        .route(web::post().to(create_account_handler)),
    )
    .service(
      web::resource("/account/{id}")
        .route(web::get().to(get_account_handler))
        .route(web::delete().to(delete_account_handler))
        .route(web::patch().to(update_account_handler))
        .route(web::put().to(update_account_handler))
        .wrap(AccountAuthMiddleware::new(deps.account_service)),
    );
}

/// Configure session routes
///
/// # Routes
///
/// - POST /login — authenticate and persist a fresh session token
/// - POST /logout — revoke the presented session token
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  login_use_case: Arc<LoginUseCase>,
  logout_use_case: Arc<LogoutUseCase>,
) {
  cfg
    .app_data(web::Data::new(login_use_case))
    .app_data(web::Data::new(logout_use_case))
    .route("/login", web::post().to(login_handler))
    .route("/logout", web::post().to(logout_handler));
}

/// Configure the transfer route
///
/// # Routes
///
/// - POST /transfer — accept (and echo) a transfer request
pub fn configure_transfer_routes(
  cfg: &mut web::ServiceConfig,
  transfer_use_case: Arc<TransferUseCase>,
) {
  cfg
    .app_data(web::Data::new(transfer_use_case))
    .route("/transfer", web::post().to(transfer_handler));
}
