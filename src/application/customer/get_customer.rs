use std::sync::Arc;
use uuid::Uuid;

use super::list_customers::CustomerDto;
use crate::domain::customer::{CustomerError, CustomerService};

pub struct GetCustomerUseCase {
  customer_service: Arc<CustomerService>,
}

impl GetCustomerUseCase {
  pub fn new(customer_service: Arc<CustomerService>) -> Self {
    Self { customer_service }
  }

  pub async fn execute(&self, customer_id: Uuid) -> Result<CustomerDto, CustomerError> {
    let customer = self.customer_service.get_customer(customer_id).await?;
    Ok(customer.into())
  }
}
