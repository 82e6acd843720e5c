use std::sync::Arc;

use sqlx::PgPool;

use synergy_auth::SessionGate;
use synergy_infra::{
    CustomerActions, CustomerStore, InvoiceActions, InvoiceStore, MemoryStore, PostgresStore,
    RevenueStore, ViewCache,
};

use crate::app::cache::ListingCache;
use crate::credentials::EnvCredentials;
use crate::session::SessionRegistry;

/// Everything the handlers need, wired once at startup.
#[derive(Clone)]
pub struct AppServices {
    pub invoice_actions: InvoiceActions,
    pub customer_actions: CustomerActions,
    pub invoices: Arc<dyn InvoiceStore>,
    pub customers: Arc<dyn CustomerStore>,
    pub revenue: Arc<dyn RevenueStore>,
    pub listings: Arc<ListingCache>,
    pub sessions: Arc<SessionRegistry>,
    pub gate: Arc<SessionGate<EnvCredentials>>,
}

pub async fn build_services(credentials: EnvCredentials) -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if use_persistent {
        build_persistent_services(credentials).await
    } else {
        build_in_memory_services(credentials)
    }
}

pub fn build_in_memory_services(credentials: EnvCredentials) -> AppServices {
    let store = Arc::new(MemoryStore::new());
    from_stores(store.clone(), store.clone(), store, credentials)
}

async fn build_persistent_services(credentials: EnvCredentials) -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");
    let store = PostgresStore::new(pool);
    store
        .ensure_schema()
        .await
        .expect("Failed to prepare database schema");
    let store = Arc::new(store);
    from_stores(store.clone(), store.clone(), store, credentials)
}

fn from_stores(
    invoices: Arc<dyn InvoiceStore>,
    customers: Arc<dyn CustomerStore>,
    revenue: Arc<dyn RevenueStore>,
    credentials: EnvCredentials,
) -> AppServices {
    let listings = Arc::new(ListingCache::new());
    let views: Arc<dyn ViewCache> = listings.clone();

    let invoice_actions = InvoiceActions::new(invoices.clone(), revenue.clone(), views.clone());
    let customer_actions = CustomerActions::new(customers.clone(), views);

    AppServices {
        invoice_actions,
        customer_actions,
        invoices,
        customers,
        revenue,
        listings,
        sessions: Arc::new(SessionRegistry::new()),
        gate: Arc::new(SessionGate::new(credentials)),
    }
}
