use actix_web::web;
use std::sync::Arc;

use crate::application::customer::{
  AddCustomerUseCase, DeleteCustomerUseCase, GetCustomerUseCase, ListCustomersUseCase,
  UpdateCustomerUseCase,
};

use super::handlers::customers::{
  add_customer_handler, delete_customer_handler, get_customer_handler, list_customers_handler,
  update_customer_handler,
};

/// Configure customer routes
///
/// Mounts the customer CRUD endpoints under the provided scope
/// (e.g. /api/customer).
///
/// # Routes
///
/// - GET / - List active customers
/// - GET /{id} - Get one active customer
/// - POST / - Add a new customer
/// - PUT / - Update a customer's name fields
/// - DELETE /{id} - Soft-delete a customer
pub fn configure_customer_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListCustomersUseCase>,
  get_use_case: Arc<GetCustomerUseCase>,
  add_use_case: Arc<AddCustomerUseCase>,
  update_use_case: Arc<UpdateCustomerUseCase>,
  delete_use_case: Arc<DeleteCustomerUseCase>,
) {
  // Store use cases in app data so handlers can access them
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(get_use_case))
    .app_data(web::Data::new(add_use_case))
    .app_data(web::Data::new(update_use_case))
    .app_data(web::Data::new(delete_use_case))
    // Configure routes
    .route("", web::get().to(list_customers_handler))
    .route("", web::post().to(add_customer_handler))
    .route("", web::put().to(update_customer_handler))
    .route("/{id}", web::get().to(get_customer_handler))
    .route("/{id}", web::delete().to(delete_customer_handler));
}
