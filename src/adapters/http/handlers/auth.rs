use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, MessageResponse},
  errors::ApiError,
  middleware::TOKEN_HEADER,
};
use crate::application::account::{LoginCommand, LoginUseCase, LogoutUseCase};

/// Extract the session token from the custom token header. A missing or
/// unreadable header is a denial, indistinguishable from a bad token.
fn extract_session_token(req: &HttpRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get(TOKEN_HEADER)
    .and_then(|h| h.to_str().ok())
    .filter(|t| !t.is_empty())
    .map(|t| t.to_string())
    .ok_or(ApiError::Denied)
}

/// Handler for logging in
///
/// POST /login
/// Body: LoginRequest (JSON)
/// Response: the account including its fresh session token
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = LoginCommand {
    email: request.email.clone(),
    password: request.password.clone(),
  };

  let account = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(account))
}

/// Handler for logging out
///
/// POST /logout
/// Headers: x-jwt-token
pub async fn logout_handler(
  use_case: web::Data<Arc<LogoutUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let token = extract_session_token(&http_req)?;

  use_case.execute(&token).await?;

  Ok(HttpResponse::Ok().json(MessageResponse {
    message: "successfully logged out".to_string(),
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_session_token_valid() {
    let req = TestRequest::default()
      .insert_header((TOKEN_HEADER, "token-123"))
      .to_http_request();

    assert_eq!(extract_session_token(&req).unwrap(), "token-123");
  }

  #[test]
  fn test_extract_session_token_missing_is_denied() {
    let req = TestRequest::default().to_http_request();

    assert!(matches!(extract_session_token(&req), Err(ApiError::Denied)));
  }

  #[test]
  fn test_extract_session_token_empty_is_denied() {
    let req = TestRequest::default()
      .insert_header((TOKEN_HEADER, ""))
      .to_http_request();

    assert!(matches!(extract_session_token(&req), Err(ApiError::Denied)));
  }
}
