//! `synergy-ledger` — the monthly revenue ledger and its synchronization rule.
//!
//! The ledger is twelve month buckets of cents. Invoice mutations keep it in
//! sync through one rule, computed here and carried out by the stores.

pub mod bucket;
pub mod sync;

pub use bucket::RevenueBucket;
pub use sync::{plan_mutation, SyncPlan};
