//! `synergy-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod id;
pub mod money;
pub mod month;

pub use id::{CustomerId, InvoiceId};
pub use money::to_cents;
pub use month::Month;
