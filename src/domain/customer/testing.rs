//! In-memory `CustomerRepository` used by service and handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::entities::Customer;
use super::errors::CustomerError;
use super::ports::CustomerRepository;

#[derive(Default)]
pub struct InMemoryCustomerRepository {
  rows: Mutex<HashMap<Uuid, Customer>>,
  failing: Mutex<bool>,
}

impl InMemoryCustomerRepository {
  pub fn new() -> Self {
    Self::default()
  }

  /// When failing, every operation returns a repository error, simulating
  /// an unreachable store.
  pub fn set_failing(&self, failing: bool) {
    *self.failing.lock().unwrap() = failing;
  }

  /// Row count regardless of status; deleted rows are counted too.
  pub fn row_count(&self) -> usize {
    self.rows.lock().unwrap().len()
  }

  fn check_available(&self) -> Result<(), CustomerError> {
    if *self.failing.lock().unwrap() {
      return Err(CustomerError::Repository(
        "storage unavailable".to_string(),
      ));
    }
    Ok(())
  }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
  async fn list_active(&self) -> Result<Vec<Customer>, CustomerError> {
    self.check_available()?;
    let rows = self.rows.lock().unwrap();
    Ok(
      rows
        .values()
        .filter(|c| c.status.is_active())
        .cloned()
        .collect(),
    )
  }

  async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Customer>, CustomerError> {
    self.check_available()?;
    let rows = self.rows.lock().unwrap();
    Ok(rows.get(&id).filter(|c| c.status.is_active()).cloned())
  }

  async fn create(&self, customer: Customer) -> Result<Customer, CustomerError> {
    self.check_available()?;
    let mut rows = self.rows.lock().unwrap();
    // Mirrors the unique index on email.
    if rows.values().any(|c| c.email == customer.email) {
      return Err(CustomerError::EmailAlreadyExists);
    }
    rows.insert(customer.id, customer.clone());
    Ok(customer)
  }

  async fn update(&self, customer: Customer) -> Result<Customer, CustomerError> {
    self.check_available()?;
    let mut rows = self.rows.lock().unwrap();
    rows.insert(customer.id, customer.clone());
    Ok(customer)
  }

  async fn email_exists(&self, email: &str) -> Result<bool, CustomerError> {
    self.check_available()?;
    let rows = self.rows.lock().unwrap();
    Ok(rows.values().any(|c| c.email.value() == email))
  }
}
