//! JSON shapes returned by the HTTP layer.

pub mod categories;
pub mod products;
pub mod response;

use chrono::{DateTime, NaiveDateTime, Utc};

pub(crate) fn utc(value: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(value, Utc)
}
