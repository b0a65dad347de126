use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to add a customer. Id, timestamps and status are assigned
/// server-side and never taken from the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomerRequest {
  #[validate(length(min = 1, max = 255, message = "First name is required"))]
  pub first_name: String,

  #[validate(length(min = 1, max = 255, message = "Last name is required"))]
  pub last_name: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: String,
}

/// Request to update a customer's name fields. Email and status cannot be
/// changed through an update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
  pub id: Uuid,

  #[validate(length(min = 1, max = 255, message = "First name is required"))]
  pub first_name: String,

  #[validate(length(min = 1, max = 255, message = "Last name is required"))]
  pub last_name: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}
