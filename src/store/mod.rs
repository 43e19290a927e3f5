// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory event log for device state changes.
//!
//! The [`EventStore`] records what happened to which device and when, and
//! answers the queries a reporting or dashboard layer needs: by device, by
//! time window, oldest/latest, full dump. It is volatile — contents live
//! for the lifetime of the process and the only reset is an explicit
//! [`EventStore::wipe`].
//!
//! Command adapters append to the store as a side effect of issuing a
//! command (see [`crate::device`]); nothing in this module performs I/O.
//!
//! # Examples
//!
//! ```
//! use domolink::store::{EventStore, FindOptions};
//! use serde_json::json;
//!
//! let store = EventStore::new();
//! store.add_record_at("tv", "MUTE", json!({}), 1_405_857_600);
//!
//! assert_eq!(store.oldest_record().unwrap().device_id, "tv");
//! assert_eq!(store.find_by_time(1_405_857_602, 5).len(), 1);
//! ```

mod event_store;
mod record;

pub use event_store::EventStore;
pub use record::{FindOptions, Record};

use chrono::{DateTime, TimeZone};

/// Formats a date as the `YYYY-MM-DD` name of its logical day bucket.
///
/// Month and day are zero-padded. Pure and total: any valid date value
/// formats without error.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use domolink::store::day_bucket;
///
/// let date = Utc.with_ymd_and_hms(2014, 7, 20, 12, 0, 0).unwrap();
/// assert_eq!(day_bucket(&date), "2014-07-20");
/// ```
#[must_use]
pub fn day_bucket<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_date_with_zero_padding() {
        let date = Utc.with_ymd_and_hms(2014, 7, 20, 12, 0, 0).unwrap();
        assert_eq!(day_bucket(&date), "2014-07-20");
    }

    #[test]
    fn single_digit_month_and_day_are_padded() {
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 23, 59, 59).unwrap();
        assert_eq!(day_bucket(&date), "2026-01-05");
    }

    #[test]
    fn time_of_day_does_not_change_the_bucket() {
        let morning = Utc.with_ymd_and_hms(2026, 8, 5, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2026, 8, 5, 23, 0, 0).unwrap();
        assert_eq!(day_bucket(&morning), day_bucket(&evening));
    }
}
