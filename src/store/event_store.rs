// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory event log for device state changes.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::record::{FindOptions, Record};

/// In-memory, append-only log of device state changes.
///
/// The store owns an ordered sequence of [`Record`]s. Records are appended
/// by the command adapters (or any other caller) and queried by reporting
/// and dashboard layers. Appending and [`wipe`](Self::wipe) are the only
/// mutations; every query is a side-effect-free read.
///
/// Store order is authoritative: records are returned in the order they were
/// appended, and [`oldest_record`](Self::oldest_record) /
/// [`latest_record`](Self::latest_record) follow that order rather than the
/// timestamp values. The store never sorts or validates timestamps —
/// supplying them in order is the caller's responsibility.
///
/// Cloning an `EventStore` produces a handle to the same record sequence,
/// so adapters and query consumers can share one log without wrapping it
/// themselves. Contents live for the lifetime of the process; there is no
/// persistence.
///
/// # Examples
///
/// ```
/// use domolink::store::{EventStore, FindOptions};
/// use serde_json::json;
///
/// let store = EventStore::new();
/// store.add_record("living-room-tv", "MUTE", json!({"muted": true}));
///
/// let records = store.find_by_device_id("living-room-tv", &FindOptions::all());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].action, "MUTE");
///
/// store.wipe();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl EventStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record timestamped with the current wall-clock time.
    ///
    /// The `value` is stored as given; callers are not required to
    /// pre-abbreviate state payloads.
    pub fn add_record(&self, device_id: impl Into<String>, action: impl Into<String>, value: Value) {
        self.add_record_at(device_id, action, value, chrono::Utc::now().timestamp());
    }

    /// Appends a record with an explicit unix-seconds timestamp.
    ///
    /// The timestamp is stored verbatim — it may lie in the past or the
    /// future, and the store performs no monotonicity check against records
    /// already present.
    pub fn add_record_at(
        &self,
        device_id: impl Into<String>,
        action: impl Into<String>,
        value: Value,
        timestamp: i64,
    ) {
        let record = Record::new(device_id, action, value, timestamp);
        tracing::debug!(
            device = %record.device_id,
            action = %record.action,
            timestamp = record.timestamp,
            "Appending record"
        );
        self.records.write().push(record);
    }

    /// Returns all records for a device that pass the given options,
    /// in store order.
    ///
    /// Returns an empty `Vec` (never an error) when nothing matches.
    #[must_use]
    pub fn find_device_actions(&self, device_id: &str, options: &FindOptions) -> Vec<Record> {
        self.records
            .read()
            .iter()
            .filter(|record| record.device_id == device_id && options.matches(record))
            .cloned()
            .collect()
    }

    /// Returns all records for a device, in store order.
    ///
    /// With empty options this is equivalent to
    /// [`find_device_actions`](Self::find_device_actions); it exists as its
    /// own entry point for callers whose intent is a plain by-device lookup.
    #[must_use]
    pub fn find_by_device_id(&self, device_id: &str, options: &FindOptions) -> Vec<Record> {
        self.find_device_actions(device_id, options)
    }

    /// Returns all records whose age relative to `since` is within
    /// `max_age` seconds, inclusive.
    ///
    /// The window is non-directional: a record with a timestamp *newer*
    /// than `since` has a negative age and is therefore always within
    /// tolerance. Results come back in store order.
    #[must_use]
    pub fn find_by_time(&self, since: i64, max_age: i64) -> Vec<Record> {
        self.records
            .read()
            .iter()
            .filter(|record| record.age_at(since) <= max_age)
            .cloned()
            .collect()
    }

    /// Returns every record in store order.
    #[must_use]
    pub fn all_records(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Returns the first record that was appended, or `None` on an empty
    /// store.
    ///
    /// "Oldest" means first in store order. If a caller appended an
    /// explicit out-of-order timestamp, this is not necessarily the record
    /// with the smallest timestamp.
    #[must_use]
    pub fn oldest_record(&self) -> Option<Record> {
        self.records.read().first().cloned()
    }

    /// Returns the most recently appended record, or `None` on an empty
    /// store.
    ///
    /// "Latest" means last in store order, with the same caveat as
    /// [`oldest_record`](Self::oldest_record).
    #[must_use]
    pub fn latest_record(&self) -> Option<Record> {
        self.records.read().last().cloned()
    }

    /// Removes all records.
    ///
    /// Idempotent: wiping an already-empty store is a no-op.
    pub fn wipe(&self) {
        let mut records = self.records.write();
        tracing::debug!(count = records.len(), "Wiping event store");
        records.clear();
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
