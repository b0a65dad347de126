use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Customer;
use super::errors::CustomerError;

/// Persistence port for customers. The status filter for reads lives here
/// and nowhere else; callers above this trait never see a deleted row.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
  /// All rows with status Active, order unspecified.
  async fn list_active(&self) -> Result<Vec<Customer>, CustomerError>;

  /// Some only when the row exists and is active. A soft-deleted row is
  /// indistinguishable from a missing one.
  async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Customer>, CustomerError>;

  /// Inserts the fully-populated entity as given. A violation of the unique
  /// email index surfaces as `CustomerError::EmailAlreadyExists`.
  async fn create(&self, customer: Customer) -> Result<Customer, CustomerError>;

  /// Persists the given field values keyed by id. Callers must have
  /// verified existence.
  async fn update(&self, customer: Customer) -> Result<Customer, CustomerError>;

  /// Any row, active or deleted. Deleted customers keep their email
  /// reserved.
  async fn email_exists(&self, email: &str) -> Result<bool, CustomerError>;
}
