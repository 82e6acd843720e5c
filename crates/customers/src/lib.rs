//! `synergy-customers` — the customer record and its form schema.

pub mod customer;
pub mod schema;

pub use customer::{Customer, DEFAULT_IMAGE_URL};
pub use schema::{CustomerDraft, CustomerSchema};
