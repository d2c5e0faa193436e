//! Daily capacity admission gate.
//!
//! A delivery date may carry at most [`DAILY_QUANTITY_CAP`] units across all
//! recorded sales plus the order being drafted. The gate compares on the
//! date portion only; sale timestamps keep whatever time the server stored.

use std::fmt;

use chrono::NaiveDate;

use crate::reference::Sale;

/// Maximum units that may be committed to a single delivery date.
pub const DAILY_QUANTITY_CAP: i64 = 2000;

/// Rejection from the admission gate.
///
/// `remaining` is `cap - committed` and is reported unclamped: a negative
/// value means historical sales alone already over-book the date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub delivery_date: NaiveDate,
    pub committed: i64,
    pub incoming: i64,
    pub remaining: i64,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total quantity for {} exceeds the limit of {} units; only {} more can be added",
            self.delivery_date, DAILY_QUANTITY_CAP, self.remaining
        )
    }
}

impl std::error::Error for CapacityExceeded {}

/// Units already committed to `delivery_date` across the sales feed.
pub fn committed_quantity(sales: &[Sale], delivery_date: NaiveDate) -> i64 {
    sales
        .iter()
        .filter(|sale| sale.delivery_date.date_naive() == delivery_date)
        .map(|sale| sale.details.iter().map(|d| d.quantity).sum::<i64>())
        .sum()
}

/// Admits or rejects `incoming` additional units for `delivery_date`.
pub fn admit(
    sales: &[Sale],
    delivery_date: NaiveDate,
    incoming: i64,
) -> std::result::Result<(), CapacityExceeded> {
    let committed = committed_quantity(sales, delivery_date);
    if committed + incoming > DAILY_QUANTITY_CAP {
        return Err(CapacityExceeded {
            delivery_date,
            committed,
            incoming,
            remaining: DAILY_QUANTITY_CAP - committed,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::SaleDetail;
    use chrono::{DateTime, Utc};

    fn sale(timestamp: &str, quantities: &[i64]) -> Sale {
        Sale {
            delivery_date: timestamp.parse::<DateTime<Utc>>().unwrap(),
            details: quantities
                .iter()
                .map(|&quantity| SaleDetail { quantity })
                .collect(),
        }
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn committed_sums_details_of_matching_dates_only() {
        let sales = vec![
            sale("2024-06-01T00:00:00Z", &[1000, 900]),
            sale("2024-06-02T00:00:00Z", &[500]),
        ];
        assert_eq!(committed_quantity(&sales, june_first()), 1900);
    }

    #[test]
    fn time_portion_is_ignored() {
        let sales = vec![sale("2024-06-01T15:45:30Z", &[700])];
        assert_eq!(committed_quantity(&sales, june_first()), 700);
    }

    #[test]
    fn rejects_when_incoming_pushes_past_the_cap() {
        let sales = vec![sale("2024-06-01T00:00:00Z", &[1000, 900])];
        let err = admit(&sales, june_first(), 150).unwrap_err();
        assert_eq!(err.committed, 1900);
        assert_eq!(err.incoming, 150);
        assert_eq!(err.remaining, 100);
    }

    #[test]
    fn admits_when_the_cap_is_not_reached() {
        let sales = vec![sale("2024-06-01T00:00:00Z", &[1000, 900])];
        assert!(admit(&sales, june_first(), 90).is_ok());
    }

    #[test]
    fn admits_exactly_at_the_cap() {
        let sales = vec![sale("2024-06-01T00:00:00Z", &[1900])];
        assert!(admit(&sales, june_first(), 100).is_ok());
    }

    #[test]
    fn over_committed_dates_report_negative_remaining() {
        let sales = vec![sale("2024-06-01T00:00:00Z", &[2100])];
        let err = admit(&sales, june_first(), 1).unwrap_err();
        assert_eq!(err.remaining, -100);
    }

    #[test]
    fn empty_feed_commits_nothing() {
        assert!(admit(&[], june_first(), 2000).is_ok());
    }
}
