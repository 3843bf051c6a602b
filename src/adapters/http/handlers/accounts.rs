use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CreateAccountRequest, MessageResponse, UpdateAccountRequest},
  errors::ApiError,
  middleware::AuthenticatedAccount,
};
use crate::application::account::{
  DeleteAccountUseCase, ListAccountsUseCase, RegisterAccountCommand, RegisterAccountUseCase,
  UpdateAccountCommand, UpdateAccountUseCase,
};

/// Handler for listing all accounts
///
/// GET /account
pub async fn list_accounts_handler(
  use_case: web::Data<Arc<ListAccountsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let accounts = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(accounts))
}

/// Handler for registering a new account
///
/// POST /account
/// Body: CreateAccountRequest (JSON)
/// Response: the created account (no password field, non-empty token)
pub async fn create_account_handler(
  request: web::Json<CreateAccountRequest>,
  use_case: web::Data<Arc<RegisterAccountUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = RegisterAccountCommand {
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
    email: request.email.clone(),
    password: request.password.clone(),
  };

  let account = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(account))
}

/// Handler for fetching one account
///
/// GET /account/{id} (behind the auth gate)
///
/// The gate already resolved and authorized the account; it is read back
/// from request extensions without a second repository round trip.
pub async fn get_account_handler(req: HttpRequest) -> Result<HttpResponse, ApiError> {
  let account = req.authenticated_account();

  Ok(HttpResponse::Ok().json(account))
}

/// Handler for updating an account's display attributes
///
/// PATCH/PUT /account/{id} (behind the auth gate)
/// Body: UpdateAccountRequest (JSON, optional — a bodyless request applies
/// no changes and returns the current record)
pub async fn update_account_handler(
  path: web::Path<i64>,
  request: Option<web::Json<UpdateAccountRequest>>,
  use_case: web::Data<Arc<UpdateAccountUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.map(|json| json.into_inner()).unwrap_or_default();

  let command = UpdateAccountCommand {
    id: path.into_inner(),
    first_name: request.first_name,
    last_name: request.last_name,
  };

  let account = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(account))
}

/// Handler for deleting an account
///
/// DELETE /account/{id} (behind the auth gate)
pub async fn delete_account_handler(
  path: web::Path<i64>,
  use_case: web::Data<Arc<DeleteAccountUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  use_case.execute(id).await?;

  Ok(HttpResponse::Ok().json(MessageResponse {
    message: format!("account {} deleted", id),
  }))
}
