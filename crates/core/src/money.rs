//! Money conversion helpers.
//!
//! Amounts arrive from forms as decimal dollars; everything the stores and
//! the ledger touch is integer cents.

/// Convert a decimal dollar amount to integer cents.
///
/// Rounds to the nearest cent so values such as `19.99` survive the
/// float representation intact.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_dollars() {
        assert_eq!(to_cents(50.0), 5000);
        assert_eq!(to_cents(0.0), 0);
    }

    #[test]
    fn fractional_dollars_round_to_the_nearest_cent() {
        assert_eq!(to_cents(19.99), 1999);
        assert_eq!(to_cents(0.3), 30);
        assert_eq!(to_cents(10.005), 1001);
    }
}
