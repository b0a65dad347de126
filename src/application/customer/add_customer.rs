use serde::Deserialize;
use std::sync::Arc;

use super::list_customers::CustomerDto;
use crate::domain::customer::{CustomerError, CustomerService, EmailAddress, PersonName};

#[derive(Debug, Deserialize)]
pub struct AddCustomerCommand {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
}

pub struct AddCustomerUseCase {
  customer_service: Arc<CustomerService>,
}

impl AddCustomerUseCase {
  pub fn new(customer_service: Arc<CustomerService>) -> Self {
    Self { customer_service }
  }

  pub async fn execute(&self, command: AddCustomerCommand) -> Result<CustomerDto, CustomerError> {
    let first_name = PersonName::new(command.first_name)?;
    let last_name = PersonName::new(command.last_name)?;
    let email = EmailAddress::new(command.email)?;

    let customer = self
      .customer_service
      .add_customer(first_name, last_name, email)
      .await?;

    Ok(customer.into())
  }
}
