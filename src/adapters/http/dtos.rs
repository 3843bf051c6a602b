use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for registering a new account
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
  #[validate(length(
    min = 1,
    max = 255,
    message = "first name must be between 1 and 255 characters"
  ))]
  pub first_name: String,

  #[validate(length(
    min = 1,
    max = 255,
    message = "last name must be between 1 and 255 characters"
  ))]
  pub last_name: String,

  #[validate(email(message = "invalid email format"))]
  pub email: String,

  #[validate(length(min = 1, message = "password is required"))]
  pub password: String,
}

/// Request for logging in.
///
/// No email-format validation here: a malformed address fails the same way
/// as an unknown one, so the login path leaks nothing about what is
/// registered.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(length(min = 1, message = "email is required"))]
  pub email: String,

  #[validate(length(min = 1, message = "password is required"))]
  pub password: String,
}

/// Request for updating an account's display attributes. Both fields are
/// optional; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
}

/// Request for submitting a transfer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
  pub to_account: i64,
  pub amount: i64,
}

/// Response echoing an accepted transfer request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
  pub to_account: i64,
  pub amount: i64,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

/// Uniform error envelope: every failure on the wire is `{"error": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_create_account_request_validation() {
    let request = CreateAccountRequest {
      first_name: "John".to_string(),
      last_name: "Doe".to_string(),
      email: "john@x.com".to_string(),
      password: "secret".to_string(),
    };
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_create_account_request_rejects_bad_email() {
    let request = CreateAccountRequest {
      first_name: "John".to_string(),
      last_name: "Doe".to_string(),
      email: "not-an-email".to_string(),
      password: "secret".to_string(),
    };
    assert!(request.validate().is_err());
  }

  #[test]
  fn test_create_account_request_parses_camel_case() {
    let request: CreateAccountRequest = serde_json::from_str(
      r#"{"firstName":"John","lastName":"Doe","email":"john@x.com","password":"secret"}"#,
    )
    .unwrap();

    assert_eq!(request.first_name, "John");
    assert_eq!(request.last_name, "Doe");
  }

  #[test]
  fn test_login_request_accepts_any_nonempty_email() {
    let request = LoginRequest {
      email: "whatever".to_string(),
      password: "secret".to_string(),
    };
    // Deliberate: format problems surface as invalid credentials later
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_transfer_request_round_trips_camel_case() {
    let request: TransferRequest =
      serde_json::from_str(r#"{"toAccount":42,"amount":1000}"#).unwrap();
    assert_eq!(request.to_account, 42);

    let response = TransferResponse {
      to_account: request.to_account,
      amount: request.amount,
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["toAccount"], 42);
    assert_eq!(json["amount"], 1000);
  }
}
