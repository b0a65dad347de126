use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::list_customers::CustomerDto;
use crate::domain::customer::{CustomerError, CustomerService, PersonName};

/// Only the name fields are mutable; anything else the caller sends is
/// ignored by design.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerCommand {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
}

pub struct UpdateCustomerUseCase {
  customer_service: Arc<CustomerService>,
}

impl UpdateCustomerUseCase {
  pub fn new(customer_service: Arc<CustomerService>) -> Self {
    Self { customer_service }
  }

  pub async fn execute(
    &self,
    command: UpdateCustomerCommand,
  ) -> Result<CustomerDto, CustomerError> {
    let first_name = PersonName::new(command.first_name)?;
    let last_name = PersonName::new(command.last_name)?;

    let customer = self
      .customer_service
      .update_customer(command.id, first_name, last_name)
      .await?;

    Ok(customer.into())
  }
}
