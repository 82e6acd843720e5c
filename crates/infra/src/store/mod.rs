//! Storage traits and their two implementations.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use synergy_core::{CustomerId, InvoiceId, Month};
use synergy_customers::{Customer, CustomerDraft};
use synergy_invoicing::Invoice;
use synergy_ledger::RevenueBucket;
use thiserror::Error;

/// Storage operation error.
///
/// Infrastructure failures only; validation never reaches the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row the operation needed does not exist.
    #[error("row missing: {0}")]
    RowMissing(String),

    /// The backend rejected or failed the statement.
    #[error("statement failed: {0}")]
    Statement(String),
}

/// Customer rows.
#[async_trait::async_trait]
pub trait CustomerStore: Send + Sync {
    async fn insert(&self, customer: &Customer) -> Result<(), StoreError>;

    /// Overwrite name and email of an existing row. Updating an id with no
    /// row behind it is a no-op, as an UPDATE matching zero rows would be.
    async fn update(&self, id: &CustomerId, draft: &CustomerDraft) -> Result<(), StoreError>;

    /// Remove at most the one row with this id.
    async fn delete(&self, id: &CustomerId) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<Customer>, StoreError>;
}

/// Invoice rows.
#[async_trait::async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert(&self, invoice: &Invoice) -> Result<(), StoreError>;

    /// Overwrite every field of the row matching `invoice.id`. Zero matching
    /// rows is a no-op.
    async fn update(&self, invoice: &Invoice) -> Result<(), StoreError>;

    /// Remove at most the one row with this id.
    async fn delete(&self, id: &InvoiceId) -> Result<(), StoreError>;

    /// All invoices, newest date first.
    async fn list(&self) -> Result<Vec<Invoice>, StoreError>;
}

/// The monthly revenue ledger.
#[async_trait::async_trait]
pub trait RevenueStore: Send + Sync {
    /// Current cents in one month's bucket.
    async fn read_bucket(&self, month: Month) -> Result<i64, StoreError>;

    /// Replace one month's bucket with a new total. Absolute, not an
    /// increment: two writers racing on the same bucket lose one write.
    async fn write_bucket(&self, month: Month, total_cents: i64) -> Result<(), StoreError>;

    /// All twelve buckets in calendar order.
    async fn list_buckets(&self) -> Result<Vec<RevenueBucket>, StoreError>;
}
