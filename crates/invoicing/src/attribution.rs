//! Which ledger month an invoice mutation is attributed to.

use chrono::NaiveDate;
use synergy_core::Month;

/// Month for a newly created invoice: the submitted invoice date when there
/// is one, otherwise the current wall-clock month.
pub fn create_month(date: Option<NaiveDate>) -> Month {
    date.map(Month::from_date).unwrap_or_else(Month::current)
}

/// Month for an invoice update.
///
/// Updates always land in the current wall-clock month, regardless of the
/// date carried by the edited invoice. A back-dated invoice is therefore
/// attributed differently on create and on update.
pub fn update_month() -> Month {
    Month::current()
}
