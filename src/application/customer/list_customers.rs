use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::customer::{Customer, CustomerError, CustomerService};

/// Wire-facing customer record, shared by every read path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
}

impl From<Customer> for CustomerDto {
  fn from(customer: Customer) -> Self {
    Self {
      id: customer.id,
      first_name: customer.first_name.into_inner(),
      last_name: customer.last_name.into_inner(),
      email: customer.email.into_inner(),
    }
  }
}

pub struct ListCustomersUseCase {
  customer_service: Arc<CustomerService>,
}

impl ListCustomersUseCase {
  pub fn new(customer_service: Arc<CustomerService>) -> Self {
    Self { customer_service }
  }

  pub async fn execute(&self) -> Result<Vec<CustomerDto>, CustomerError> {
    let customers = self.customer_service.list_customers().await?;
    Ok(customers.into_iter().map(CustomerDto::from).collect())
  }
}
