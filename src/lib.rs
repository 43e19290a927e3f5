// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `domolink` - a Rust library for bridging home-automation devices.
//!
//! This library provides thin per-device command senders that translate
//! semantic commands into vendor wire codes over raw TCP, and an in-memory
//! event log that records device state changes for later querying.
//!
//! # Supported Features
//!
//! - **Command sending**: Semantic commands (`MUTE`, `VOL_UP`, ...)
//!   translated to vendor wire codes and delivered fire-and-forget
//! - **Event logging**: Append-only, in-memory record of device state
//!   changes with by-device, by-time, and oldest/latest queries
//! - **State normalization**: Raw nested device-state payloads flattened
//!   into a uniform per-device summary shape
//!
//! # Quick Start
//!
//! ## Recording and querying events
//!
//! ```
//! use domolink::store::{EventStore, FindOptions};
//! use serde_json::json;
//!
//! let store = EventStore::new();
//! store.add_record("living-room-tv", "MUTE", json!({"muted": true}));
//!
//! let events = store.find_by_device_id("living-room-tv", &FindOptions::all());
//! assert_eq!(events.len(), 1);
//! assert_eq!(store.latest_record().unwrap().action, "MUTE");
//! ```
//!
//! ## Sending a command to a device
//!
//! ```no_run
//! use domolink::command::PioneerCommand;
//! use domolink::device::{DeviceConfig, PioneerReceiver};
//! use domolink::store::EventStore;
//!
//! #[tokio::main]
//! async fn main() -> domolink::Result<()> {
//!     let store = EventStore::new();
//!     let receiver = PioneerReceiver::new(
//!         DeviceConfig::new("living-room-amp", "192.168.1.40").with_port(8102),
//!     )?
//!     .with_store(store.clone());
//!
//!     // Issued commands are recorded into the attached store.
//!     receiver.send(PioneerCommand::VolumeUp).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Normalizing a raw state payload
//!
//! ```
//! use domolink::state::abbreviate_state;
//! use serde_json::json;
//!
//! let state = json!({
//!     "tv":  { "typeClass": "av" },
//!     "hub": { "value": { "devices": [{ "title": "Lamp", "value": "on" }] } },
//! });
//!
//! let summaries = abbreviate_state(&state).unwrap();
//! assert_eq!(summaries.len(), 2);
//! ```

pub mod command;
pub mod device;
pub mod error;
pub mod protocol;
pub mod state;
pub mod store;

pub use command::{Command, PioneerCommand};
pub use device::{DeviceConfig, PioneerReceiver};
pub use error::{CommandError, Error, ProtocolError, Result, StateError};
pub use protocol::{CommandReply, Protocol, TcpConfig, TcpSender};
pub use state::{DeviceSnapshot, StateMap, StateSummary, SubDevice, abbreviate_state};
pub use store::{EventStore, FindOptions, Record, day_bucket};
