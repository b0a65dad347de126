use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{AddCustomerRequest, UpdateCustomerRequest},
  errors::ApiError,
};
use crate::application::customer::{
  AddCustomerCommand, AddCustomerUseCase, DeleteCustomerCommand, DeleteCustomerUseCase,
  GetCustomerUseCase, ListCustomersUseCase, UpdateCustomerCommand, UpdateCustomerUseCase,
};

/// Handler for listing active customers
///
/// GET /api/customer
/// Response: array of customer records with status 200
pub async fn list_customers_handler(
  use_case: web::Data<Arc<ListCustomersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let customers = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(customers))
}

/// Handler for fetching one active customer
///
/// GET /api/customer/{id}
/// Response: customer record with status 200, or 404 when the id is
/// unknown or soft-deleted
pub async fn get_customer_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetCustomerUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let customer = use_case.execute(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(customer))
}

/// Handler for adding a customer
///
/// POST /api/customer
/// Body: AddCustomerRequest (JSON)
/// Response: the created record with status 200, or 400 when the email is
/// already taken
pub async fn add_customer_handler(
  request: web::Json<AddCustomerRequest>,
  use_case: web::Data<Arc<AddCustomerUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = AddCustomerCommand {
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
    email: request.email.clone(),
  };

  let customer = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(customer))
}

/// Handler for updating a customer's name fields
///
/// PUT /api/customer
/// Body: UpdateCustomerRequest (JSON)
/// Response: the updated record with status 200, or 404 when the id is
/// unknown or soft-deleted
pub async fn update_customer_handler(
  request: web::Json<UpdateCustomerRequest>,
  use_case: web::Data<Arc<UpdateCustomerUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = UpdateCustomerCommand {
    id: request.id,
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
  };

  let customer = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(customer))
}

/// Handler for soft-deleting a customer
///
/// DELETE /api/customer/{id}
/// Response: empty 200, or 404 when the id is unknown or already deleted
pub async fn delete_customer_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteCustomerUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = DeleteCustomerCommand {
    customer_id: path.into_inner(),
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().finish())
}
