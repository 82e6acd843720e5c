//! Mutation services: validation, store writes, ledger sync, and view
//! invalidation sequenced per operation.

mod customers;
mod invoices;

pub use customers::{
    CreateCustomerOutcome, CustomerActions, UpdateCustomerOutcome,
};
pub use invoices::{CreateInvoiceOutcome, InvoiceActions, UpdateInvoiceOutcome};
