//! Customer repository backed by SQLite.
//!
//! Deletes are soft: the row keeps its primary key with `deleted_at` set, so an
//! id can never be inserted again. Every read filters on `deleted_at IS NULL`,
//! which makes a deleted customer look exactly like one that never existed.
//!
//! Each operation is a single statement, so SQLite's write lock makes it atomic
//! without an explicit transaction.

use crate::{DbError, Result as DbErrorResult};

use cm_core::{Customer, CustomerStore, NewCustomer, StoreResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "customers";

#[derive(Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, customer: &Customer) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO customers (
                    id, full_name, email, github_username, date_of_birth,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(customer.id.to_string())
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(&customer.github_username)
        .bind(customer.date_of_birth)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Customer>> {
        let row = sqlx::query(
            r#"
                SELECT id, full_name, email, github_username, date_of_birth,
                    created_at, updated_at
                FROM customers
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(customer_from_row).transpose()
    }

    /// Live customers in insertion order
    pub async fn find_all(&self) -> DbErrorResult<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
                SELECT id, full_name, email, github_username, date_of_birth,
                    created_at, updated_at
                FROM customers
                WHERE deleted_at IS NULL
                ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(customer_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Overwrite all fields of a live customer, returning the stored row
    pub async fn update(
        &self,
        id: Uuid,
        customer: &NewCustomer,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Option<Customer>> {
        let row = sqlx::query(
            r#"
                UPDATE customers
                SET full_name = ?, email = ?, github_username = ?,
                    date_of_birth = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
                RETURNING id, full_name, email, github_username, date_of_birth,
                    created_at, updated_at
            "#,
        )
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(&customer.github_username)
        .bind(customer.date_of_birth)
        .bind(updated_at)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(customer_from_row).transpose()
    }

    /// Returns whether a live customer was deleted
    pub async fn soft_delete(&self, id: Uuid, deleted_at: DateTime<Utc>) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE customers
                SET deleted_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(deleted_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn create(&self, customer: NewCustomer) -> StoreResult<Customer> {
        let customer = Customer::new(customer);
        self.insert(&customer).await?;
        Ok(customer)
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.find_all().await?)
    }

    async fn replace(&self, id: Uuid, customer: NewCustomer) -> StoreResult<Option<Customer>> {
        Ok(self.update(id, &customer, Utc::now()).await?)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.soft_delete(id, Utc::now()).await?)
    }
}

fn customer_from_row(row: &SqliteRow) -> DbErrorResult<Customer> {
    let id: String = row.try_get("id")?;

    Ok(Customer {
        id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
            table: TABLE,
            message: format!("Invalid UUID in customers.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        full_name: row.try_get("full_name")?,
        email: row.try_get("email")?,
        github_username: row.try_get("github_username")?,
        date_of_birth: row.try_get::<NaiveDate, _>("date_of_birth")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}
