use actix_web::{
  Error, HttpMessage, HttpResponse,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::adapters::http::dtos::ErrorResponse;
use crate::domain::account::{entities::Account, services::AccountService};

/// Custom request header carrying the session token.
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Per-resource authorization middleware for `/account/{id}` routes.
///
/// For each request it:
/// 1. Extracts the session token from the `x-jwt-token` header
/// 2. Validates the token and resolves the `{id}` account via
///    [`AccountService::authorize`], which also requires the presented token
///    to equal the account's stored one
/// 3. Attaches the resolved [`Account`] to request extensions and calls the
///    downstream handler
///
/// Every failure — missing header, bad signature, expired token, unknown
/// id, foreign token — answers the same `403 {"error":"permission denied"}`
/// without invoking the handler. A denial never reveals which step failed.
pub struct AccountAuthMiddleware {
  account_service: Arc<AccountService>,
}

impl AccountAuthMiddleware {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AccountAuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AccountAuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AccountAuthMiddlewareService {
      service: Rc::new(service),
      account_service: self.account_service.clone(),
    }))
  }
}

pub struct AccountAuthMiddlewareService<S> {
  service: Rc<S>,
  account_service: Arc<AccountService>,
}

impl<S, B> Service<ServiceRequest> for AccountAuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let account_service = self.account_service.clone();

    Box::pin(async move {
      tracing::debug!("account auth middleware engaged");

      // An absent header is not distinguished from an invalid token
      let token = match req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|t| !t.is_empty())
      {
        Some(token) => token.to_string(),
        None => return Ok(permission_denied(req)),
      };

      let account_id = match req
        .match_info()
        .get("id")
        .and_then(|id| id.parse::<i64>().ok())
      {
        Some(id) => id,
        None => return Ok(permission_denied(req)),
      };

      let account = match account_service.authorize(&token, account_id).await {
        Ok(account) => account,
        Err(_) => return Ok(permission_denied(req)),
      };

      // Attach the resolved account for downstream handlers
      req.extensions_mut().insert(account);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Uniform forbidden response; the denial reason is deliberately withheld.
fn permission_denied<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
  let (request, _) = req.into_parts();
  let response = HttpResponse::Forbidden()
    .json(ErrorResponse {
      error: "permission denied".to_string(),
    })
    .map_into_right_body();

  ServiceResponse::new(request, response)
}

/// Extension trait to extract the account resolved by the auth gate
pub trait AuthenticatedAccount {
  /// Get the authorized account from request extensions
  ///
  /// # Panics
  ///
  /// Panics if no account is present. Only call this in handlers behind
  /// [`AccountAuthMiddleware`].
  fn authenticated_account(&self) -> Account;
}

impl AuthenticatedAccount for actix_web::HttpRequest {
  fn authenticated_account(&self) -> Account {
    self
      .extensions()
      .get::<Account>()
      .cloned()
      .expect("Account not found in request extensions. Is AccountAuthMiddleware configured?")
  }
}
