//! Reservation input

use chrono::{NaiveDate, NaiveTime};

/// Reservation fields as written by create and update.
///
/// `customer_id` is not checked here; the store's foreign key decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReservation {
    pub customer_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}
