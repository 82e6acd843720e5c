//! Postgres-backed stores.
//!
//! One SQL statement per trait method, bound positionally. Ids are stored as
//! opaque text: rows imported from elsewhere keep whatever id shape they
//! arrived with, and the invoice `customer_id` column carries no foreign key
//! so an invoice may name a customer the store has never seen.

use std::collections::HashMap;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use synergy_core::{CustomerId, InvoiceId, Month};
use synergy_customers::{Customer, CustomerDraft};
use synergy_invoicing::{Invoice, InvoiceStatus};
use synergy_ledger::RevenueBucket;

use super::{CustomerStore, InvoiceStore, RevenueStore, StoreError};

/// Store backed by a SQLx Postgres pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::RowMissing(err.to_string()),
            _ => StoreError::Statement(err.to_string()),
        }
    }
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the tables if they do not exist and seed the twelve revenue
    /// buckets at zero. Safe to call on every startup.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id        TEXT PRIMARY KEY,
                name      TEXT NOT NULL,
                email     TEXT NOT NULL,
                image_url TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id           TEXT PRIMARY KEY,
                customer_id  TEXT NOT NULL,
                project_name TEXT NOT NULL,
                amount       BIGINT NOT NULL,
                remaining    BIGINT NULL,
                progress     DOUBLE PRECISION NULL,
                status       TEXT NOT NULL,
                date         DATE NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS revenue (
                month   VARCHAR(4) NOT NULL UNIQUE,
                revenue BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for month in Month::ALL {
            sqlx::query(
                "INSERT INTO revenue (month, revenue) VALUES ($1, 0) ON CONFLICT (month) DO NOTHING",
            )
            .bind(month.label())
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}

fn decode_customer(row: &PgRow) -> Result<Customer, StoreError> {
    Ok(Customer {
        id: CustomerId::from(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        image_url: row.try_get("image_url")?,
    })
}

fn decode_invoice(row: &PgRow) -> Result<Invoice, StoreError> {
    let status_raw: String = row.try_get("status")?;
    let status = InvoiceStatus::parse(&status_raw)
        .ok_or_else(|| StoreError::Statement(format!("unknown invoice status '{status_raw}'")))?;

    Ok(Invoice {
        id: InvoiceId::from(row.try_get::<String, _>("id")?),
        customer_id: CustomerId::from(row.try_get::<String, _>("customer_id")?),
        project_name: row.try_get("project_name")?,
        amount_cents: row.try_get("amount")?,
        remaining_cents: row.try_get("remaining")?,
        progress: row.try_get("progress")?,
        status,
        date: row.try_get("date")?,
    })
}

#[async_trait::async_trait]
impl CustomerStore for PostgresStore {
    async fn insert(&self, customer: &Customer) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(customer.id.as_str())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, id: &CustomerId, draft: &CustomerDraft) -> Result<(), StoreError> {
        sqlx::query("UPDATE customers SET name = $1, email = $2 WHERE id = $3")
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, email, image_url FROM customers ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(decode_customer).collect()
    }
}

#[async_trait::async_trait]
impl InvoiceStore for PostgresStore {
    async fn insert(&self, invoice: &Invoice) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, project_name, amount, remaining, progress, status, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(invoice.id.as_str())
        .bind(invoice.customer_id.as_str())
        .bind(&invoice.project_name)
        .bind(invoice.amount_cents)
        .bind(invoice.remaining_cents)
        .bind(invoice.progress)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, invoice: &Invoice) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = $1, project_name = $2, amount = $3, remaining = $4,
                progress = $5, status = $6, date = $7
            WHERE id = $8
            "#,
        )
        .bind(invoice.customer_id.as_str())
        .bind(&invoice.project_name)
        .bind(invoice.amount_cents)
        .bind(invoice.remaining_cents)
        .bind(invoice.progress)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .bind(invoice.id.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, project_name, amount, remaining, progress, status, date
            FROM invoices
            ORDER BY date DESC NULLS LAST, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(decode_invoice).collect()
    }
}

#[async_trait::async_trait]
impl RevenueStore for PostgresStore {
    async fn read_bucket(&self, month: Month) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT revenue FROM revenue WHERE month = $1")
            .bind(month.label())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(row.try_get("revenue")?),
            None => Err(StoreError::RowMissing(format!("revenue bucket {month}"))),
        }
    }

    async fn write_bucket(&self, month: Month, total_cents: i64) -> Result<(), StoreError> {
        // Zero matched rows is not an error, mirroring plain UPDATE behavior.
        sqlx::query("UPDATE revenue SET revenue = $1 WHERE month = $2")
            .bind(total_cents)
            .bind(month.label())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<RevenueBucket>, StoreError> {
        let rows = sqlx::query("SELECT month, revenue FROM revenue")
            .fetch_all(&self.pool)
            .await?;

        let mut by_month = HashMap::new();
        for row in &rows {
            let label: String = row.try_get("month")?;
            if let Some(month) = Month::from_label(&label) {
                by_month.insert(month, row.try_get::<i64, _>("revenue")?);
            }
        }

        Ok(Month::ALL
            .into_iter()
            .map(|month| RevenueBucket {
                month,
                revenue_cents: by_month.get(&month).copied().unwrap_or(0),
            })
            .collect())
    }
}
