use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::customer::{CustomerError, CustomerService};

#[derive(Debug, Deserialize)]
pub struct DeleteCustomerCommand {
  pub customer_id: Uuid,
}

pub struct DeleteCustomerUseCase {
  customer_service: Arc<CustomerService>,
}

impl DeleteCustomerUseCase {
  pub fn new(customer_service: Arc<CustomerService>) -> Self {
    Self { customer_service }
  }

  pub async fn execute(&self, command: DeleteCustomerCommand) -> Result<(), CustomerError> {
    self
      .customer_service
      .delete_customer(command.customer_id)
      .await
  }
}
