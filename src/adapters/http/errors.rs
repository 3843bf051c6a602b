use actix_web::{
  HttpRequest, HttpResponse,
  error::{JsonPayloadError, PathError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::account::errors::AccountError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses.
///
/// The wire contract is deliberately narrow: authentication and
/// authorization failures answer 403 with the fixed message
/// `permission denied` (never revealing which check failed), everything
/// else answers 500 with the error message in the `{"error": ...}`
/// envelope. NotFound and DuplicateEmail are surfaced through the same
/// 500 path as any other store failure.
#[derive(Debug)]
pub enum ApiError {
  /// Authentication/authorization denial (403, uniform message)
  Denied,

  /// Malformed request body or path parameter; the message is surfaced
  /// verbatim
  Validation(String),

  /// Store-level failure, including missing rows and constraint violations
  Store(String),

  /// Unexpected internal failure; details are logged, not surfaced
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Denied => write!(f, "permission denied"),
      ApiError::Validation(msg) => write!(f, "{}", msg),
      ApiError::Store(msg) => write!(f, "{}", msg),
      ApiError::Internal(msg) => write!(f, "internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Denied => StatusCode::FORBIDDEN,
      // Everything else is caught at the dispatch boundary as a 500
      ApiError::Validation(_) | ApiError::Store(_) | ApiError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let message = match self {
      ApiError::Denied => "permission denied".to_string(),
      ApiError::Validation(msg) => msg.clone(),
      ApiError::Store(msg) => msg.clone(),
      ApiError::Internal(msg) => {
        tracing::error!("internal error: {}", msg);
        "internal server error".to_string()
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse { error: message })
  }
}

/// Convert AccountError to ApiError
impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    match error {
      // Both collapse into the uniform denial: a caller can never tell a
      // bad credential from a bad/revoked token or a missing account
      AccountError::InvalidCredentials | AccountError::TokenInvalid => ApiError::Denied,
      AccountError::Validation(e) => ApiError::Validation(e.to_string()),
      AccountError::NotFound => ApiError::Store(error.to_string()),
      AccountError::DuplicateEmail(_) => ApiError::Store(error.to_string()),
      AccountError::Repository(e) => {
        tracing::error!("repository failure: {}", e);
        ApiError::Store(e.to_string())
      }
      AccountError::Hash(e) => ApiError::Internal(e.to_string()),
      AccountError::Token(e) => ApiError::Internal(e.to_string()),
    }
  }
}

/// Convert validation errors from the validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

/// Routes malformed JSON bodies into the uniform envelope instead of
/// actix-web's default plain-text response.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  ApiError::Validation(err.to_string()).into()
}

/// Routes unparsable path parameters into the uniform envelope.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
  ApiError::Validation(format!("invalid id given: {}", err)).into()
}
