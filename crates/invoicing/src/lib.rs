//! `synergy-invoicing` — the invoice record, its form schema, and ledger
//! month attribution.
//!
//! Pure domain logic: no IO, no HTTP, no storage. Validation and attribution
//! decide *what* should happen; the infra layer carries it out.

pub mod attribution;
pub mod invoice;
pub mod schema;

pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus};
pub use schema::InvoiceSchema;
