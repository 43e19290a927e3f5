// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `domolink` library.
//!
//! This module provides the error hierarchy for the two halves of the
//! library: command translation and raw-socket delivery on the adapter side,
//! and state-payload normalization on the event-log side.
//!
//! Absence of data is never an error: the event store's lookups return an
//! empty `Vec` or `None` when nothing matches, so frequent polling call
//! sites stay catch-free.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when sending
/// commands to devices or normalizing device-state payloads.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while normalizing a state payload.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Error occurred while translating a command.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Error occurred during socket communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to device-state payloads.
#[derive(Debug, Error)]
pub enum StateError {
    /// The payload is not the expected mapping shape.
    ///
    /// State payloads must be a JSON object keyed by device identifier,
    /// and each per-device entry must itself be an object.
    #[error("invalid state payload: {0}")]
    InvalidInput(String),
}

/// Errors related to command translation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The semantic command name is not in the device's whitelist.
    #[error("unknown command: {0}")]
    Unknown(String),
}

/// Errors related to raw-socket communication with a device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Socket I/O failed mid-exchange.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Connecting to the device timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display() {
        let err = StateError::InvalidInput("state payload is not an object".to_string());
        assert_eq!(
            err.to_string(),
            "invalid state payload: state payload is not an object"
        );
    }

    #[test]
    fn command_error_display() {
        let err = CommandError::Unknown("VOL_MAX".to_string());
        assert_eq!(err.to_string(), "unknown command: VOL_MAX");
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::Timeout(5000);
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }

    #[test]
    fn error_from_command_error() {
        let err: Error = CommandError::Unknown("BASS_UP".to_string()).into();
        assert!(matches!(err, Error::Command(CommandError::Unknown(_))));
    }

    #[test]
    fn error_from_state_error() {
        let err: Error = StateError::InvalidInput("nope".to_string()).into();
        assert!(matches!(err, Error::State(StateError::InvalidInput(_))));
    }
}
