//! Expiry classification.
//!
//! Pure functions over the item collection: no wall-clock reads, no caching,
//! no errors. The reference instant always comes in as an argument so the
//! same inputs always give the same partition.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::Item;

/// Forward warning window for the "expiring soon" bucket.
pub const EXPIRY_WINDOW_DAYS: i64 = 3;

/// Disjoint partition of the items that carry an expiry date. Items without
/// one appear in neither bucket. Both buckets keep the input's relative
/// order.
#[derive(Debug, Clone, Default)]
pub struct ExpiryReport {
    pub expired: Vec<Item>,
    pub expiring_soon: Vec<Item>,
}

impl ExpiryReport {
    pub fn is_clear(&self) -> bool {
        self.expired.is_empty() && self.expiring_soon.is_empty()
    }
}

/// Partition `items` against the reference instant `now`.
///
/// Expiry dates are compared at midnight UTC. A date at or before `now` is
/// expired: an item expiring exactly at the current instant counts as
/// expired, not expiring-soon. After that the soon-window upper bound is
/// inclusive: a date exactly [`EXPIRY_WINDOW_DAYS`] out is still "soon".
pub fn classify(items: &[Item], now: DateTime<Utc>) -> ExpiryReport {
    let horizon = now + Duration::days(EXPIRY_WINDOW_DAYS);
    let mut report = ExpiryReport::default();

    for item in items {
        let Some(date) = item.expiry else { continue };
        let Some(expiry) = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()) else {
            continue;
        };

        if expiry <= now {
            report.expired.push(item.clone());
        } else if expiry <= horizon {
            report.expiring_soon.push(item.clone());
        }
    }

    report
}

/// Whole days from `now`'s calendar date to `expiry`. Negative when the date
/// has passed. Display helper for the listing's status column.
pub fn days_until(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    (expiry - now.date_naive()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Unit};

    fn item(name: &str, expiry: Option<NaiveDate>) -> Item {
        Item {
            id: format!("id-{}", name),
            name: name.to_string(),
            category: Category::Staple,
            quantity: 1.0,
            unit: Unit::Piece,
            expiry,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap().and_utc()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn items_without_expiry_are_in_neither_bucket() {
        let report = classify(&[item("Garam", None)], midnight(2026, 8, 7));
        assert!(report.is_clear());
    }

    #[test]
    fn yesterday_is_expired() {
        let report = classify(
            &[item("Susu", Some(date(2026, 8, 6)))],
            midnight(2026, 8, 7),
        );
        assert_eq!(names(&report.expired), ["Susu"]);
        assert!(report.expiring_soon.is_empty());
    }

    #[test]
    fn the_exact_current_instant_is_expired() {
        let report = classify(
            &[item("Susu", Some(date(2026, 8, 7)))],
            midnight(2026, 8, 7),
        );
        assert_eq!(names(&report.expired), ["Susu"]);
        assert!(report.expiring_soon.is_empty());
    }

    #[test]
    fn three_days_out_is_expiring_soon() {
        let report = classify(
            &[item("Roti", Some(date(2026, 8, 10)))],
            midnight(2026, 8, 7),
        );
        assert_eq!(names(&report.expiring_soon), ["Roti"]);
        assert!(report.expired.is_empty());
    }

    #[test]
    fn four_days_out_is_in_neither_bucket() {
        let report = classify(
            &[item("Roti", Some(date(2026, 8, 11)))],
            midnight(2026, 8, 7),
        );
        assert!(report.is_clear());
    }

    #[test]
    fn buckets_are_disjoint_and_keep_input_order() {
        let items = vec![
            item("A", Some(date(2026, 8, 1))),
            item("B", Some(date(2026, 8, 9))),
            item("C", Some(date(2026, 8, 5))),
            item("D", Some(date(2026, 8, 8))),
        ];
        let report = classify(&items, midnight(2026, 8, 7));

        assert_eq!(names(&report.expired), ["A", "C"]);
        assert_eq!(names(&report.expiring_soon), ["B", "D"]);
        for expired in &report.expired {
            assert!(report.expiring_soon.iter().all(|s| s.id != expired.id));
        }
    }

    #[test]
    fn milk_bread_rice_scenario() {
        let today = midnight(2026, 8, 7);
        let items = vec![
            item("Milk", Some(date(2026, 8, 6))),
            item("Bread", Some(date(2026, 8, 9))),
            item("Rice", None),
        ];
        let report = classify(&items, today);

        assert_eq!(names(&report.expired), ["Milk"]);
        assert_eq!(names(&report.expiring_soon), ["Bread"]);
    }

    #[test]
    fn window_tracks_the_time_of_day() {
        // 10:00 on the 7th: midnight of the 10th is inside now+3d,
        // midnight of the 11th is not.
        let now = date(2026, 8, 7).and_hms_opt(10, 0, 0).unwrap().and_utc();
        let report = classify(
            &[
                item("Roti", Some(date(2026, 8, 10))),
                item("Keju", Some(date(2026, 8, 11))),
            ],
            now,
        );
        assert_eq!(names(&report.expiring_soon), ["Roti"]);
    }

    #[test]
    fn days_until_counts_calendar_days() {
        let now = midnight(2026, 8, 7);
        assert_eq!(days_until(date(2026, 8, 10), now), 3);
        assert_eq!(days_until(date(2026, 8, 6), now), -1);
        assert_eq!(days_until(date(2026, 8, 7), now), 0);
    }
}
