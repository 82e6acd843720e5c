use std::collections::HashMap;
use std::sync::RwLock;

use synergy_core::{CustomerId, InvoiceId, Month};
use synergy_customers::{Customer, CustomerDraft};
use synergy_invoicing::Invoice;
use synergy_ledger::RevenueBucket;

use super::{CustomerStore, InvoiceStore, RevenueStore, StoreError};

/// In-memory store backing tests and local development.
///
/// Deliberately mirrors SQL statement behavior: an update or delete against
/// an id with no row is a silent no-op, and `write_bucket` replaces rather
/// than increments. Not optimized for performance.
#[derive(Debug)]
pub struct MemoryStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
    invoices: RwLock<HashMap<InvoiceId, Invoice>>,
    revenue: RwLock<HashMap<Month, i64>>,
}

impl MemoryStore {
    /// An empty store with all twelve revenue buckets seeded at zero.
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
            invoices: RwLock::new(HashMap::new()),
            revenue: RwLock::new(Month::ALL.into_iter().map(|m| (m, 0)).collect()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Statement("lock poisoned".to_string())
}

#[async_trait::async_trait]
impl CustomerStore for MemoryStore {
    async fn insert(&self, customer: &Customer) -> Result<(), StoreError> {
        let mut customers = self.customers.write().map_err(|_| poisoned())?;
        customers.insert(customer.id.clone(), customer.clone());
        Ok(())
    }

    async fn update(&self, id: &CustomerId, draft: &CustomerDraft) -> Result<(), StoreError> {
        let mut customers = self.customers.write().map_err(|_| poisoned())?;
        if let Some(customer) = customers.get_mut(id) {
            customer.name = draft.name.clone();
            customer.email = draft.email.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), StoreError> {
        let mut customers = self.customers.write().map_err(|_| poisoned())?;
        customers.remove(id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = self.customers.read().map_err(|_| poisoned())?;
        let mut rows: Vec<Customer> = customers.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl InvoiceStore for MemoryStore {
    async fn insert(&self, invoice: &Invoice) -> Result<(), StoreError> {
        let mut invoices = self.invoices.write().map_err(|_| poisoned())?;
        invoices.insert(invoice.id.clone(), invoice.clone());
        Ok(())
    }

    async fn update(&self, invoice: &Invoice) -> Result<(), StoreError> {
        let mut invoices = self.invoices.write().map_err(|_| poisoned())?;
        if let Some(row) = invoices.get_mut(&invoice.id) {
            *row = invoice.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), StoreError> {
        let mut invoices = self.invoices.write().map_err(|_| poisoned())?;
        invoices.remove(id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let invoices = self.invoices.read().map_err(|_| poisoned())?;
        let mut rows: Vec<Invoice> = invoices.values().cloned().collect();
        // Newest first, undated rows last, id as a stable tie-break.
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl RevenueStore for MemoryStore {
    async fn read_bucket(&self, month: Month) -> Result<i64, StoreError> {
        let revenue = self.revenue.read().map_err(|_| poisoned())?;
        revenue
            .get(&month)
            .copied()
            .ok_or_else(|| StoreError::RowMissing(format!("revenue bucket {month}")))
    }

    async fn write_bucket(&self, month: Month, total_cents: i64) -> Result<(), StoreError> {
        let mut revenue = self.revenue.write().map_err(|_| poisoned())?;
        if let Some(bucket) = revenue.get_mut(&month) {
            *bucket = total_cents;
        }
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<RevenueBucket>, StoreError> {
        let revenue = self.revenue.read().map_err(|_| poisoned())?;
        Ok(Month::ALL
            .into_iter()
            .map(|month| RevenueBucket {
                month,
                revenue_cents: revenue.get(&month).copied().unwrap_or(0),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use synergy_invoicing::InvoiceStatus;

    use super::*;

    fn invoice(id: &str, date: Option<NaiveDate>) -> Invoice {
        Invoice {
            id: InvoiceId::from(id),
            customer_id: CustomerId::from("c1"),
            project_name: "Project".to_string(),
            amount_cents: 1000,
            remaining_cents: None,
            progress: None,
            status: InvoiceStatus::Pending,
            date,
        }
    }

    #[tokio::test]
    async fn buckets_start_at_zero_for_every_month() {
        let store = MemoryStore::new();
        for month in Month::ALL {
            assert_eq!(RevenueStore::read_bucket(&store, month).await.unwrap(), 0);
        }
        assert_eq!(store.list_buckets().await.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn bucket_writes_replace_the_total() {
        let store = MemoryStore::new();
        store.write_bucket(Month::Mar, 1000).await.unwrap();
        store.write_bucket(Month::Mar, 6000).await.unwrap();
        assert_eq!(store.read_bucket(Month::Mar).await.unwrap(), 6000);
        assert_eq!(store.read_bucket(Month::Feb).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invoice_listing_is_newest_first() {
        let store = MemoryStore::new();
        let older = invoice("a", NaiveDate::from_ymd_opt(2024, 1, 10));
        let newer = invoice("b", NaiveDate::from_ymd_opt(2024, 3, 5));
        let undated = invoice("c", None);
        InvoiceStore::insert(&store, &older).await.unwrap();
        InvoiceStore::insert(&store, &newer).await.unwrap();
        InvoiceStore::insert(&store, &undated).await.unwrap();

        let ids: Vec<String> = InvoiceStore::list(&store)
            .await
            .unwrap()
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn updating_a_missing_row_is_a_no_op() {
        let store = MemoryStore::new();
        let ghost = invoice("ghost", None);
        InvoiceStore::update(&store, &ghost).await.unwrap();
        assert!(InvoiceStore::list(&store).await.unwrap().is_empty());

        let draft = CustomerDraft {
            name: "Nobody".to_string(),
            email: "nobody@example.com".to_string(),
        };
        CustomerStore::update(&store, &CustomerId::from("ghost"), &draft)
            .await
            .unwrap();
        assert!(CustomerStore::list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let store = MemoryStore::new();
        InvoiceStore::insert(&store, &invoice("a", None)).await.unwrap();
        InvoiceStore::insert(&store, &invoice("b", None)).await.unwrap();

        InvoiceStore::delete(&store, &InvoiceId::from("a")).await.unwrap();
        let rows = InvoiceStore::list(&store).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "b");

        // Deleting again changes nothing.
        InvoiceStore::delete(&store, &InvoiceId::from("a")).await.unwrap();
        assert_eq!(InvoiceStore::list(&store).await.unwrap().len(), 1);
    }
}
