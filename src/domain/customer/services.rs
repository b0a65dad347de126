use std::sync::Arc;
use uuid::Uuid;

use super::entities::Customer;
use super::errors::CustomerError;
use super::ports::CustomerRepository;
use super::value_objects::{EmailAddress, PersonName};

/// Owns all customer business rules; the repository has none.
pub struct CustomerService {
  customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
  pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
    Self { customer_repo }
  }

  pub async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
    self.customer_repo.list_active().await
  }

  pub async fn get_customer(&self, customer_id: Uuid) -> Result<Customer, CustomerError> {
    self
      .customer_repo
      .find_active_by_id(customer_id)
      .await?
      .ok_or(CustomerError::NotFound(customer_id))
  }

  pub async fn add_customer(
    &self,
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
  ) -> Result<Customer, CustomerError> {
    // The unique index on email is the authoritative guard against
    // concurrent duplicates; this check is the fast path. Both active and
    // deleted customers reserve their email.
    if self.customer_repo.email_exists(email.value()).await? {
      return Err(CustomerError::EmailAlreadyExists);
    }

    let customer = Customer::new(first_name, last_name, email);
    self.customer_repo.create(customer).await
  }

  pub async fn update_customer(
    &self,
    customer_id: Uuid,
    first_name: PersonName,
    last_name: PersonName,
  ) -> Result<Customer, CustomerError> {
    // NotFound covers missing and soft-deleted rows identically.
    let mut customer = self
      .customer_repo
      .find_active_by_id(customer_id)
      .await?
      .ok_or(CustomerError::NotFound(customer_id))?;

    customer.rename(first_name, last_name);
    self.customer_repo.update(customer).await
  }

  pub async fn delete_customer(&self, customer_id: Uuid) -> Result<(), CustomerError> {
    let mut customer = self
      .customer_repo
      .find_active_by_id(customer_id)
      .await?
      .ok_or(CustomerError::NotFound(customer_id))?;

    customer.mark_deleted();
    self.customer_repo.update(customer).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::customer::testing::InMemoryCustomerRepository;
  use crate::domain::customer::value_objects::CustomerStatus;

  fn service() -> (Arc<InMemoryCustomerRepository>, CustomerService) {
    let repo = Arc::new(InMemoryCustomerRepository::new());
    let service = CustomerService::new(repo.clone());
    (repo, service)
  }

  fn name(value: &str) -> PersonName {
    PersonName::new(value.to_string()).unwrap()
  }

  fn email(value: &str) -> EmailAddress {
    EmailAddress::new(value.to_string()).unwrap()
  }

  #[tokio::test]
  async fn test_add_customer_assigns_server_side_fields() {
    let (_, service) = service();

    let customer = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();

    assert_eq!(customer.status, CustomerStatus::Active);
    assert_eq!(customer.created_on, customer.last_updated_on);

    let other = service
      .add_customer(name("Kevin"), name("Bacon"), email("k@x.com"))
      .await
      .unwrap();
    assert_ne!(customer.id, other.id);
  }

  #[tokio::test]
  async fn test_add_customer_rejects_duplicate_email() {
    let (_, service) = service();

    service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();

    let result = service
      .add_customer(name("Other"), name("Person"), email("e@x.com"))
      .await;
    assert!(matches!(result, Err(CustomerError::EmailAlreadyExists)));
  }

  #[tokio::test]
  async fn test_add_customer_rejects_email_of_deleted_customer() {
    let (_, service) = service();

    let customer = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();
    service.delete_customer(customer.id).await.unwrap();

    // The uniqueness check ignores status.
    let result = service
      .add_customer(name("Other"), name("Person"), email("e@x.com"))
      .await;
    assert!(matches!(result, Err(CustomerError::EmailAlreadyExists)));
  }

  #[tokio::test]
  async fn test_add_customer_propagates_storage_failure() {
    let (repo, service) = service();
    repo.set_failing(true);

    let result = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await;
    assert!(matches!(result, Err(CustomerError::Repository(_))));
  }

  #[tokio::test]
  async fn test_get_customer_not_found() {
    let (_, service) = service();
    let missing = Uuid::new_v4();

    let result = service.get_customer(missing).await;
    assert!(matches!(result, Err(CustomerError::NotFound(id)) if id == missing));
  }

  #[tokio::test]
  async fn test_update_customer_changes_only_names() {
    let (_, service) = service();

    let customer = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();

    let updated = service
      .update_customer(customer.id, name("Kevin"), name("Watson"))
      .await
      .unwrap();

    assert_eq!(updated.first_name.value(), "Kevin");
    assert_eq!(updated.email.value(), "e@x.com");
    assert_eq!(updated.status, CustomerStatus::Active);
    assert_eq!(updated.created_on, customer.created_on);
    assert!(updated.last_updated_on >= customer.last_updated_on);
  }

  #[tokio::test]
  async fn test_update_customer_not_found() {
    let (_, service) = service();

    let result = service
      .update_customer(Uuid::new_v4(), name("Kevin"), name("Watson"))
      .await;
    assert!(matches!(result, Err(CustomerError::NotFound(_))));
  }

  #[tokio::test]
  async fn test_update_deleted_customer_reports_not_found() {
    let (_, service) = service();

    let customer = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();
    service.delete_customer(customer.id).await.unwrap();

    let result = service
      .update_customer(customer.id, name("Kevin"), name("Watson"))
      .await;
    assert!(matches!(result, Err(CustomerError::NotFound(_))));
  }

  #[tokio::test]
  async fn test_delete_customer_hides_row_but_keeps_it() {
    let (repo, service) = service();

    let customer = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();

    service.delete_customer(customer.id).await.unwrap();

    // Invisible to every customer-facing read...
    let result = service.get_customer(customer.id).await;
    assert!(matches!(result, Err(CustomerError::NotFound(_))));
    assert!(service.list_customers().await.unwrap().is_empty());

    // ...but the row still exists internally.
    assert_eq!(repo.row_count(), 1);
  }

  #[tokio::test]
  async fn test_delete_twice_reports_not_found() {
    let (_, service) = service();

    let customer = service
      .add_customer(name("Emma"), name("Watson"), email("e@x.com"))
      .await
      .unwrap();

    service.delete_customer(customer.id).await.unwrap();
    let result = service.delete_customer(customer.id).await;
    assert!(matches!(result, Err(CustomerError::NotFound(_))));
  }

  #[tokio::test]
  async fn test_list_customers_excludes_deleted() {
    let (_, service) = service();

    let a = service
      .add_customer(name("Emma"), name("Watson"), email("a@x.com"))
      .await
      .unwrap();
    service
      .add_customer(name("Kevin"), name("Bacon"), email("b@x.com"))
      .await
      .unwrap();
    service
      .add_customer(name("Grace"), name("Hopper"), email("c@x.com"))
      .await
      .unwrap();

    service.delete_customer(a.id).await.unwrap();

    let customers = service.list_customers().await.unwrap();
    assert_eq!(customers.len(), 2);
    assert!(customers.iter().all(|c| c.id != a.id));
  }
}
