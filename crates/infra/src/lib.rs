//! Infrastructure layer: stores, view cache, and the mutation services that
//! drive them.
//!
//! The stores come in two interchangeable flavors, in-memory (tests/dev) and
//! Postgres (production), behind the traits in [`store`]. The [`actions`]
//! services sequence validation, store writes, ledger synchronization, and
//! view invalidation exactly the same way against either flavor.

pub mod actions;
pub mod store;
pub mod views;

pub use actions::{
    CreateCustomerOutcome, CreateInvoiceOutcome, CustomerActions, InvoiceActions,
    UpdateCustomerOutcome, UpdateInvoiceOutcome,
};
pub use store::{CustomerStore, InvoiceStore, MemoryStore, PostgresStore, RevenueStore, StoreError};
pub use views::{ViewCache, ViewPath};
