// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire protocols for delivering commands to devices.
//!
//! The bridge's devices speak plain line protocols over raw TCP: one
//! CRLF-terminated command line out, at most one short reply back. The
//! [`TcpSender`] implements that cycle; the [`Protocol`] trait is the seam
//! adapters program against.

mod tcp;

pub use tcp::{TcpConfig, TcpSender};

use crate::command::Command;
use crate::error::ProtocolError;

/// Reply from a device after a command exchange.
///
/// Command sockets are fire-and-forget sinks: many devices acknowledge with
/// a short status line, but a silent device is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    body: Option<String>,
}

impl CommandReply {
    /// Creates a reply with the given body.
    ///
    /// An empty body is normalized to a silent reply.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            body: (!body.is_empty()).then_some(body),
        }
    }

    /// Creates a reply for a device that sent nothing back.
    #[must_use]
    pub fn silent() -> Self {
        Self { body: None }
    }

    /// Returns the reply body, if the device sent one.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns `true` if the device sent nothing back.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.body.is_none()
    }
}

/// Trait for protocol implementations that can deliver commands to devices.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command to the device and returns its reply, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the device cannot be reached or the
    /// exchange fails mid-flight. A device that accepts the command but
    /// stays silent is not an error.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandReply, ProtocolError>;

    /// Sends a raw command line to the device.
    ///
    /// The line terminator is appended by the implementation.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    async fn send_raw(&self, line: &str) -> Result<CommandReply, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_with_body() {
        let reply = CommandReply::new("MUT1");
        assert_eq!(reply.body(), Some("MUT1"));
        assert!(!reply.is_silent());
    }

    #[test]
    fn silent_reply_has_no_body() {
        let reply = CommandReply::silent();
        assert_eq!(reply.body(), None);
        assert!(reply.is_silent());
    }

    #[test]
    fn empty_body_is_normalized_to_silent() {
        assert!(CommandReply::new("").is_silent());
    }
}
