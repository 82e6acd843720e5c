//! Calendar months, the keys of the revenue ledger.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar month, independent of year.
///
/// Serializes to the three-letter label stored in the revenue table
/// (`"Jan"`…`"Dec"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Three-letter label, as keyed in the revenue table.
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Parse a three-letter label back into a month.
    pub fn from_label(label: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Month of a calendar date.
    pub fn from_date(date: NaiveDate) -> Month {
        // month0 is guaranteed to be in 0..12.
        Month::ALL[date.month0() as usize]
    }

    /// Month of the current wall clock (UTC).
    pub fn current() -> Month {
        Month::from_date(Utc::now().date_naive())
    }
}

impl core::fmt::Display for Month {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_label(month.label()), Some(month));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(Month::from_label("March"), None);
        assert_eq!(Month::from_label(""), None);
    }

    #[test]
    fn month_of_a_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(Month::from_date(date), Month::Mar);

        let edge = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(Month::from_date(edge), Month::Dec);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Month::Mar).unwrap(), "\"Mar\"");
    }

    #[test]
    fn calendar_order() {
        assert!(Month::Jan < Month::Feb);
        assert!(Month::Nov < Month::Dec);
    }
}
