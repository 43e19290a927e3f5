// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stored event records and query options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single stored device-state-change event.
///
/// Records are created by [`EventStore::add_record`](super::EventStore::add_record)
/// and are immutable once stored; the only way to remove them is
/// [`EventStore::wipe`](super::EventStore::wipe). The `value` is kept exactly
/// as the caller supplied it — it may be a raw state map, an abbreviated
/// summary, or any other JSON payload.
///
/// Serialized field names follow the wire convention used by dashboard
/// consumers: `deviceId`, `action`, `value`, `timestamp`.
///
/// # Examples
///
/// ```
/// use domolink::store::Record;
/// use serde_json::json;
///
/// let record = Record::new("living-room-tv", "MUTE", json!({"muted": true}), 1_405_857_600);
/// assert_eq!(record.device_id, "living-room-tv");
/// assert_eq!(record.age_at(1_405_857_605), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Identifier of the device this event belongs to.
    pub device_id: String,
    /// The action that was performed or observed.
    pub action: String,
    /// The payload stored with the event, kept as given.
    pub value: Value,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        action: impl Into<String>,
        value: Value,
        timestamp: i64,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            action: action.into(),
            value,
            timestamp,
        }
    }

    /// Returns the age of this record in seconds relative to `since`.
    ///
    /// Negative for records whose timestamp lies after `since`.
    #[must_use]
    pub fn age_at(&self, since: i64) -> i64 {
        since - self.timestamp
    }
}

/// Options for the by-device lookups.
///
/// The default options match every record of the device. An action filter
/// can be set to narrow a lookup to one action; further filters may be
/// added here without changing the lookup signatures.
///
/// # Examples
///
/// ```
/// use domolink::store::FindOptions;
///
/// // Match all actions for a device
/// let all = FindOptions::all();
/// assert!(all.action().is_none());
///
/// // Match a single action
/// let muted = FindOptions::for_action("MUTE");
/// assert_eq!(muted.action(), Some("MUTE"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindOptions {
    action: Option<String>,
}

impl FindOptions {
    /// Creates empty options that match every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates options that match only records with the given action.
    #[must_use]
    pub fn for_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
        }
    }

    /// Returns the action filter, if set.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Checks whether a record passes these options.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match &self.action {
            Some(action) => record.action == *action,
            None => true,
        }
    }
}
