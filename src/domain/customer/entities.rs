use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{CustomerStatus, EmailAddress, PersonName};

// Customer - the sole entity; rows are soft-deleted, never removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
  pub id: Uuid,
  pub first_name: PersonName,
  pub last_name: PersonName,
  pub email: EmailAddress,
  pub created_on: DateTime<Utc>,
  pub last_updated_on: DateTime<Utc>,
  pub status: CustomerStatus,
}

impl Customer {
  /// Id, timestamps and status are assigned here, never taken from caller
  /// input.
  pub fn new(first_name: PersonName, last_name: PersonName, email: EmailAddress) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      first_name,
      last_name,
      email,
      created_on: now,
      last_updated_on: now,
      status: CustomerStatus::Active,
    }
  }

  /// Overlays the mutable fields. Email, status and created_on cannot be
  /// changed through an update.
  pub fn rename(&mut self, first_name: PersonName, last_name: PersonName) {
    self.first_name = first_name;
    self.last_name = last_name;
    self.last_updated_on = Utc::now();
  }

  /// Active -> Deleted, the only transition. The row stays queryable
  /// internally but disappears from every customer-facing read.
  pub fn mark_deleted(&mut self) {
    self.status = CustomerStatus::Deleted;
    self.last_updated_on = Utc::now();
  }

  pub fn is_deleted(&self) -> bool {
    self.status == CustomerStatus::Deleted
  }
}
