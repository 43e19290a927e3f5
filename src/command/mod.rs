// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic device commands.
//!
//! Commands abstract over vendor wire protocols: callers deal with
//! semi-readable semantic names (`MUTE`, `VOL_UP`) and each device's
//! command type translates them into the codes its wire protocol expects.
//!
//! # Examples
//!
//! ```
//! use domolink::command::{Command, PioneerCommand};
//!
//! let cmd = PioneerCommand::Mute;
//! assert_eq!(cmd.name(), "MUTE");
//! assert_eq!(cmd.wire_code(), "MZ");
//! assert_eq!(cmd.to_wire(), "MZ\r\n");
//! ```

mod pioneer;

pub use pioneer::PioneerCommand;

/// A semantic command that can be sent to a device.
///
/// Implementations map the semantic name onto the vendor's wire code;
/// the default [`to_wire`](Self::to_wire) applies the CRLF framing the
/// device's line protocol expects.
pub trait Command {
    /// Returns the semantic command name, e.g. `"VOL_UP"`.
    fn name(&self) -> &'static str;

    /// Returns the vendor wire code, e.g. `"VU"`.
    fn wire_code(&self) -> &'static str;

    /// Returns the full wire line for this command, CRLF-terminated.
    fn to_wire(&self) -> String {
        format!("{}\r\n", self.wire_code())
    }
}
