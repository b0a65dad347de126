use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::customer::CustomerError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Duplicate email on add (400 Bad Request with a fixed message)
  EmailAlreadyExists,

  /// Unknown or soft-deleted customer (404 Not Found)
  NotFound,

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::EmailAlreadyExists => write!(f, "Email already exists"),
      ApiError::NotFound => write!(f, "Customer not found"),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::EmailAlreadyExists => StatusCode::BAD_REQUEST,
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::EmailAlreadyExists => {
        ("email_already_exists", "Email already exists.".to_string())
      }
      ApiError::NotFound => ("not_found", "Customer not found".to_string()),
      ApiError::Internal(msg) => {
        // The cause of an internal failure is only visible in logs, never
        // in the API response.
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert CustomerError to ApiError
impl From<CustomerError> for ApiError {
  fn from(error: CustomerError) -> Self {
    match error {
      CustomerError::Validation(err) => ApiError::Validation(err.to_string()),
      CustomerError::NotFound(_) => ApiError::NotFound,
      CustomerError::EmailAlreadyExists => ApiError::EmailAlreadyExists,
      CustomerError::Repository(msg) => ApiError::Internal(msg),
      CustomerError::Database(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
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
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::EmailAlreadyExists.status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_customer_error_conversion() {
    let api_error: ApiError = CustomerError::NotFound(Uuid::new_v4()).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = CustomerError::EmailAlreadyExists.into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    // Infrastructure faults surface as 500, never as a business outcome.
    let api_error: ApiError = CustomerError::Repository("down".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
