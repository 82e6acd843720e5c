//! Ledger rows.

use serde::{Deserialize, Serialize};
use synergy_core::Month;

/// One month of the revenue ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBucket {
    pub month: Month,
    pub revenue_cents: i64,
}
