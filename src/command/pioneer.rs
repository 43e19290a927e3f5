// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for Pioneer AV receivers.

use std::fmt;
use std::str::FromStr;

use crate::command::Command;
use crate::error::CommandError;

/// A command understood by a Pioneer AV receiver's telnet control port.
///
/// The variants form the whitelist of supported semantic keys; anything
/// else fails to parse. Wire codes follow Pioneer's two-letter command set.
///
/// # Examples
///
/// ```
/// use domolink::command::{Command, PioneerCommand};
///
/// let cmd: PioneerCommand = "VOL_UP".parse().unwrap();
/// assert_eq!(cmd, PioneerCommand::VolumeUp);
/// assert_eq!(cmd.wire_code(), "VU");
///
/// assert!("VOL_MAX".parse::<PioneerCommand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PioneerCommand {
    /// Toggle standby power.
    Power,
    /// Toggle audio mute.
    Mute,
    /// Raise the volume one step.
    VolumeUp,
    /// Lower the volume one step.
    VolumeDown,
}

impl PioneerCommand {
    /// Every supported command, in whitelist order.
    pub const ALL: [Self; 4] = [Self::Mute, Self::Power, Self::VolumeDown, Self::VolumeUp];

    /// Returns the semantic name as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "POWER",
            Self::Mute => "MUTE",
            Self::VolumeUp => "VOL_UP",
            Self::VolumeDown => "VOL_DOWN",
        }
    }
}

impl Command for PioneerCommand {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn wire_code(&self) -> &'static str {
        match self {
            Self::Power => "PZ",
            Self::Mute => "MZ",
            Self::VolumeUp => "VU",
            Self::VolumeDown => "VD",
        }
    }
}

impl FromStr for PioneerCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POWER" => Ok(Self::Power),
            "MUTE" => Ok(Self::Mute),
            "VOL_UP" => Ok(Self::VolumeUp),
            "VOL_DOWN" => Ok(Self::VolumeDown),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for PioneerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_names_map_to_wire_codes() {
        assert_eq!(PioneerCommand::Power.wire_code(), "PZ");
        assert_eq!(PioneerCommand::Mute.wire_code(), "MZ");
        assert_eq!(PioneerCommand::VolumeUp.wire_code(), "VU");
        assert_eq!(PioneerCommand::VolumeDown.wire_code(), "VD");
    }

    #[test]
    fn parses_whitelisted_names() {
        for cmd in PioneerCommand::ALL {
            assert_eq!(cmd.as_str().parse::<PioneerCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "BASS_UP".parse::<PioneerCommand>().unwrap_err();
        assert_eq!(err, CommandError::Unknown("BASS_UP".to_string()));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("mute".parse::<PioneerCommand>().is_err());
    }

    #[test]
    fn display_matches_semantic_name() {
        assert_eq!(PioneerCommand::VolumeDown.to_string(), "VOL_DOWN");
    }
}
