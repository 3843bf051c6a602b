use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{TransferRequest, TransferResponse},
  errors::ApiError,
};
use crate::application::account::{TransferCommand, TransferUseCase};

/// Handler for submitting a transfer request
///
/// POST /transfer
/// Body: TransferRequest (JSON)
/// Response: the request echoed back; no balance is mutated.
pub async fn transfer_handler(
  request: web::Json<TransferRequest>,
  use_case: web::Data<Arc<TransferUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = TransferCommand {
    to_account: request.to_account,
    amount: request.amount,
  };

  let receipt = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(TransferResponse {
    to_account: receipt.to_account,
    amount: receipt.amount,
  }))
}
