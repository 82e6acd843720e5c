//! The ledger synchronization rule.
//!
//! Every invoice mutation plans one bucket write from one bucket read. The
//! planned total is always `current + amount` with the mutation's full
//! amount, never a delta against what the invoice carried before. The write
//! happens only when the mutated invoice is paid.

use synergy_core::Month;

/// The bucket write an invoice mutation intends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPlan {
    /// Bucket the mutation is attributed to.
    pub month: Month,
    /// Total the bucket should hold after the mutation.
    pub new_total_cents: i64,
    /// Whether the bucket is written at all. Pending invoices read the
    /// bucket but leave it untouched.
    pub write_back: bool,
}

/// Plan the bucket write for a mutation of `amount_cents` against a bucket
/// currently holding `current_cents`.
///
/// An update re-adds its full amount on top of whatever the bucket holds;
/// nothing here subtracts the invoice's previous contribution.
pub fn plan_mutation(month: Month, current_cents: i64, amount_cents: i64, paid: bool) -> SyncPlan {
    SyncPlan {
        month,
        // Saturate rather than wrap: a total past i64::MAX cents clamps
        // instead of going negative.
        new_total_cents: current_cents.saturating_add(amount_cents),
        write_back: paid,
    }
}
