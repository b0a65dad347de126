use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::customer::{
  Customer, CustomerError, CustomerRepository, CustomerStatus, EmailAddress, PersonName,
};

#[derive(Debug, FromRow)]
struct CustomerRow {
  id: Uuid,
  first_name: String,
  last_name: String,
  email: String,
  created_on: DateTime<Utc>,
  last_updated_on: DateTime<Utc>,
  status: String,
}

impl TryFrom<CustomerRow> for Customer {
  type Error = CustomerError;

  fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
    Ok(Customer {
      id: row.id,
      first_name: PersonName::new(row.first_name)?,
      last_name: PersonName::new(row.last_name)?,
      email: EmailAddress::new(row.email)?,
      created_on: row.created_on,
      last_updated_on: row.last_updated_on,
      status: CustomerStatus::from_str(&row.status)?,
    })
  }
}

/// True for a violation of the unique index on email.
fn is_unique_violation(err: &sqlx::Error) -> bool {
  match err {
    sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
    _ => false,
  }
}

pub struct PostgresCustomerRepository {
  pool: PgPool,
}

impl PostgresCustomerRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
  async fn list_active(&self) -> Result<Vec<Customer>, CustomerError> {
    let rows = sqlx::query_as::<_, CustomerRow>(
      r#"
            SELECT id, first_name, last_name, email, created_on, last_updated_on, status
            FROM customers
            WHERE status = 'active'
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Customer>, CustomerError> {
    let row = sqlx::query_as::<_, CustomerRow>(
      r#"
            SELECT id, first_name, last_name, email, created_on, last_updated_on, status
            FROM customers
            WHERE id = $1 AND status = 'active'
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn create(&self, customer: Customer) -> Result<Customer, CustomerError> {
    let row = sqlx::query_as::<_, CustomerRow>(
      r#"
            INSERT INTO customers (id, first_name, last_name, email, created_on, last_updated_on, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, created_on, last_updated_on, status
            "#,
    )
    .bind(customer.id)
    .bind(customer.first_name.value())
    .bind(customer.last_name.value())
    .bind(customer.email.value())
    .bind(customer.created_on)
    .bind(customer.last_updated_on)
    .bind(customer.status.as_str())
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      // The index is what actually guards against a concurrent duplicate;
      // the service's pre-check only catches the common case.
      if is_unique_violation(&e) {
        CustomerError::EmailAlreadyExists
      } else {
        CustomerError::Database(e)
      }
    })?;

    row.try_into()
  }

  async fn update(&self, customer: Customer) -> Result<Customer, CustomerError> {
    let row = sqlx::query_as::<_, CustomerRow>(
      r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, last_updated_on = $4, status = $5
            WHERE id = $1
            RETURNING id, first_name, last_name, email, created_on, last_updated_on, status
            "#,
    )
    .bind(customer.id)
    .bind(customer.first_name.value())
    .bind(customer.last_name.value())
    .bind(customer.last_updated_on)
    .bind(customer.status.as_str())
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn email_exists(&self, email: &str) -> Result<bool, CustomerError> {
    // No status filter: deleted customers keep their email reserved.
    let exists = sqlx::query_scalar::<_, bool>(
      r#"
            SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)
            "#,
    )
    .bind(email)
    .fetch_one(&self.pool)
    .await?;

    Ok(exists)
  }
}
