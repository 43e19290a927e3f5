// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalization of raw device-state payloads.
//!
//! Device callbacks deliver state as a JSON mapping from device identifier
//! to a loosely-shaped object: either plain scalar fields (`typeClass` and
//! friends) or a `value` wrapper carrying a `devices` sequence of
//! `{title, value}` sub-devices. The shape is decided once at ingestion —
//! each entry becomes a [`DeviceSnapshot`] — and then flattened into the
//! uniform [`StateSummary`] shape that gets logged and shipped to
//! dashboards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StateError;

/// A raw state mapping: device identifier to per-device payload.
pub type StateMap = serde_json::Map<String, Value>;

/// One flattened sub-device entry from a nested payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDevice {
    /// Human-readable name of the sub-device.
    #[serde(default)]
    pub title: String,
    /// Reported value of the sub-device.
    #[serde(default)]
    pub value: Value,
}

/// The shape of one per-device entry, decided at ingestion.
///
/// An entry whose `value` field is an object carrying a `devices` array is
/// [`Nested`](Self::Nested): the wrapper is consumed and its sub-devices
/// lifted out. Everything else is [`Scalar`](Self::Scalar) and its fields
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceSnapshot {
    /// An entry with only direct fields.
    Scalar {
        /// The entry's fields, as given.
        fields: StateMap,
    },
    /// An entry carrying nested sub-devices.
    Nested {
        /// The entry's fields, minus the consumed `value` wrapper.
        fields: StateMap,
        /// The flattened sub-device sequence.
        devices: Vec<SubDevice>,
    },
}

impl DeviceSnapshot {
    /// Builds a snapshot from one per-device entry.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidInput`] if the entry is not an object,
    /// or if a nested sub-device element is malformed.
    pub fn from_value(value: &Value) -> Result<Self, StateError> {
        let Some(fields) = value.as_object() else {
            return Err(StateError::InvalidInput(
                "device entry is not an object".to_string(),
            ));
        };

        let nested = fields
            .get("value")
            .and_then(Value::as_object)
            .and_then(|wrapper| wrapper.get("devices"))
            .and_then(Value::as_array);

        match nested {
            Some(devices) => {
                let devices = devices
                    .iter()
                    .map(|entry| {
                        serde_json::from_value(entry.clone()).map_err(|err| {
                            StateError::InvalidInput(format!("malformed sub-device entry: {err}"))
                        })
                    })
                    .collect::<Result<Vec<SubDevice>, StateError>>()?;

                let mut fields = fields.clone();
                fields.shift_remove("value");
                Ok(Self::Nested { fields, devices })
            }
            None => Ok(Self::Scalar {
                fields: fields.clone(),
            }),
        }
    }

    /// Returns the entry's fields.
    #[must_use]
    pub fn fields(&self) -> &StateMap {
        match self {
            Self::Scalar { fields } | Self::Nested { fields, .. } => fields,
        }
    }

    /// Returns the nested sub-devices, if any.
    #[must_use]
    pub fn devices(&self) -> Option<&[SubDevice]> {
        match self {
            Self::Scalar { .. } => None,
            Self::Nested { devices, .. } => Some(devices),
        }
    }

    /// Flattens this snapshot into a summary keyed by `device_id`.
    ///
    /// The mapping key is authoritative: a `deviceId` field inside the
    /// entry is discarded in its favor.
    #[must_use]
    pub fn into_summary(self, device_id: impl Into<String>) -> StateSummary {
        let (mut fields, devices) = match self {
            Self::Scalar { fields } => (fields, None),
            Self::Nested { fields, devices } => (fields, Some(devices)),
        };
        fields.shift_remove("deviceId");

        StateSummary {
            device_id: device_id.into(),
            fields,
            devices,
        }
    }
}

/// The uniform per-device summary produced by [`abbreviate_state`].
///
/// Serializes to the flat wire shape
/// `{"deviceId": …, <fields…>, "devices": […]}`, with `devices` present
/// only for entries that carried nested sub-devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    /// The device identifier (the input mapping's key).
    #[serde(rename = "deviceId")]
    pub device_id: String,
    /// The entry's remaining fields, flattened into the summary.
    #[serde(flatten)]
    pub fields: StateMap,
    /// The flattened sub-device sequence, if the entry had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<SubDevice>>,
}

/// Normalizes a raw state mapping into one [`StateSummary`] per device.
///
/// Produces exactly one summary per key of the input mapping, in the
/// mapping's insertion order.
///
/// # Errors
///
/// Returns [`StateError::InvalidInput`] if the payload is not a JSON
/// object, or if any per-device entry is malformed.
///
/// # Examples
///
/// ```
/// use domolink::state::abbreviate_state;
/// use serde_json::json;
///
/// let state = json!({
///     "tv":  { "typeClass": "av" },
///     "hub": { "value": { "devices": [{ "title": "Lamp", "value": "on" }] } },
/// });
///
/// let summaries = abbreviate_state(&state).unwrap();
/// assert_eq!(summaries[0].device_id, "tv");
/// assert!(summaries[0].devices.is_none());
/// assert_eq!(summaries[1].devices.as_ref().unwrap()[0].title, "Lamp");
/// ```
pub fn abbreviate_state(state: &Value) -> Result<Vec<StateSummary>, StateError> {
    let Some(map) = state.as_object() else {
        return Err(StateError::InvalidInput(
            "state payload is not an object".to_string(),
        ));
    };

    map.iter()
        .map(|(device_id, entry)| {
            DeviceSnapshot::from_value(entry).map(|snapshot| snapshot.into_summary(device_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_entry_keeps_fields_and_has_no_devices() {
        let state = json!({
            "device1": { "deviceId": "device", "typeClass": "foo" },
            "device2": { "value": { "devices": [
                { "title": "Something", "value": "on" },
                { "title": "Thing", "value": "off" },
            ] } },
        });

        let summaries = abbreviate_state(&state).unwrap();
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].device_id, "device1");
        assert!(summaries[0].devices.is_none());
        assert_eq!(summaries[0].fields["typeClass"], "foo");

        assert_eq!(summaries[1].device_id, "device2");
        let devices = summaries[1].devices.as_ref().unwrap();
        assert_eq!(devices[0].title, "Something");
        assert_eq!(devices[1].title, "Thing");
    }

    #[test]
    fn mapping_key_wins_over_embedded_device_id() {
        let state = json!({ "outlet": { "deviceId": "something-else" } });
        let summaries = abbreviate_state(&state).unwrap();

        assert_eq!(summaries[0].device_id, "outlet");
        assert!(!summaries[0].fields.contains_key("deviceId"));
    }

    #[test]
    fn nested_wrapper_is_consumed() {
        let state = json!({
            "hub": {
                "typeClass": "bridge",
                "value": { "devices": [{ "title": "Lamp", "value": "on" }], "extra": 1 },
            },
        });

        let summaries = abbreviate_state(&state).unwrap();
        assert_eq!(summaries[0].fields["typeClass"], "bridge");
        assert!(!summaries[0].fields.contains_key("value"));
        assert_eq!(summaries[0].devices.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn scalar_value_field_is_not_a_wrapper() {
        // A `value` that is not an object with `devices` stays a plain field.
        let state = json!({ "dimmer": { "value": 75 } });
        let summaries = abbreviate_state(&state).unwrap();

        assert!(summaries[0].devices.is_none());
        assert_eq!(summaries[0].fields["value"], 75);
    }

    #[test]
    fn output_follows_input_insertion_order() {
        let state = json!({
            "zeta": { "typeClass": "a" },
            "alpha": { "typeClass": "b" },
        });

        let summaries = abbreviate_state(&state).unwrap();
        assert_eq!(summaries[0].device_id, "zeta");
        assert_eq!(summaries[1].device_id, "alpha");
    }

    #[test]
    fn empty_mapping_yields_empty_sequence() {
        let summaries = abbreviate_state(&json!({})).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn non_mapping_input_is_rejected() {
        assert!(matches!(
            abbreviate_state(&json!([1, 2, 3])),
            Err(StateError::InvalidInput(_))
        ));
        assert!(matches!(
            abbreviate_state(&json!("tv")),
            Err(StateError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_object_entry_is_rejected() {
        assert!(matches!(
            abbreviate_state(&json!({ "tv": 5 })),
            Err(StateError::InvalidInput(_))
        ));
    }

    #[test]
    fn sub_device_fields_default_when_missing() {
        let state = json!({ "hub": { "value": { "devices": [{}] } } });
        let summaries = abbreviate_state(&state).unwrap();

        let devices = summaries[0].devices.as_ref().unwrap();
        assert_eq!(devices[0].title, "");
        assert_eq!(devices[0].value, Value::Null);
    }

    #[test]
    fn summary_serializes_flat() {
        let state = json!({ "tv": { "typeClass": "av" } });
        let summaries = abbreviate_state(&state).unwrap();

        let json = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(json["deviceId"], "tv");
        assert_eq!(json["typeClass"], "av");
        assert!(json.get("devices").is_none());
    }

    #[test]
    fn snapshot_accessors() {
        let entry = json!({ "value": { "devices": [{ "title": "X", "value": "on" }] } });
        let snapshot = DeviceSnapshot::from_value(&entry).unwrap();

        assert!(snapshot.fields().is_empty());
        assert_eq!(snapshot.devices().unwrap()[0].title, "X");

        let scalar = DeviceSnapshot::from_value(&json!({ "typeClass": "foo" })).unwrap();
        assert!(scalar.devices().is_none());
        assert_eq!(scalar.fields()["typeClass"], "foo");
    }
}
