// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-state normalization.
//!
//! Raw state payloads arrive as loosely-shaped JSON mappings; this module
//! decides each entry's shape once at ingestion ([`DeviceSnapshot`]) and
//! flattens it into the uniform [`StateSummary`] shape via
//! [`abbreviate_state`].

mod snapshot;

pub use snapshot::{DeviceSnapshot, StateMap, StateSummary, SubDevice, abbreviate_state};
