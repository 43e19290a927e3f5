// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device command adapters.
//!
//! Adapters are thin: they translate semantic commands into a device's wire
//! codes, push them over the device's socket, and optionally record each
//! successfully issued command into a shared [`EventStore`]. They keep no
//! internal state and perform no retries.

use std::time::Duration;

use serde_json::Value;

use crate::command::{Command, PioneerCommand};
use crate::error::Result;
use crate::protocol::{CommandReply, Protocol, TcpConfig, TcpSender};
use crate::store::EventStore;

/// Connection settings for one bridged device.
///
/// # Examples
///
/// ```
/// use domolink::device::DeviceConfig;
///
/// let config = DeviceConfig::new("living-room-amp", "192.168.1.40").with_port(8102);
/// assert_eq!(config.device_id(), "living-room-amp");
/// assert_eq!(config.port(), 8102);
/// ```
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    device_id: String,
    host: String,
    port: u16,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl DeviceConfig {
    /// Default control port (telnet).
    pub const DEFAULT_PORT: u16 = 23;

    /// Creates a configuration for a device at the given host.
    #[must_use]
    pub fn new(device_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            host: host.into(),
            port: Self::DEFAULT_PORT,
            connect_timeout: TcpConfig::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: TcpConfig::DEFAULT_READ_TIMEOUT,
        }
    }

    /// Sets a custom control port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the reply read timeout.
    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the control port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    fn tcp_config(&self) -> TcpConfig {
        TcpConfig::new(self.host.clone(), self.port)
            .with_connect_timeout(self.connect_timeout)
            .with_read_timeout(self.read_timeout)
    }
}

/// Command adapter for a Pioneer AV receiver.
///
/// Translates [`PioneerCommand`]s into the receiver's two-letter wire codes
/// and sends them over its telnet control socket. When a store is attached
/// via [`with_store`](Self::with_store), every successfully issued command
/// is recorded as an event (`device_id`, semantic command name, wire code).
///
/// # Examples
///
/// ```no_run
/// use domolink::command::PioneerCommand;
/// use domolink::device::{DeviceConfig, PioneerReceiver};
/// use domolink::store::EventStore;
///
/// # async fn example() -> domolink::Result<()> {
/// let store = EventStore::new();
/// let receiver = PioneerReceiver::new(
///     DeviceConfig::new("living-room-amp", "192.168.1.40").with_port(8102),
/// )?
/// .with_store(store.clone());
///
/// receiver.send(PioneerCommand::Mute).await?;
/// assert_eq!(store.latest_record().unwrap().action, "MUTE");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PioneerReceiver {
    config: DeviceConfig,
    sender: TcpSender,
    store: Option<EventStore>,
}

impl PioneerReceiver {
    /// Creates an adapter for the configured device.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured address is invalid.
    pub fn new(config: DeviceConfig) -> Result<Self> {
        let sender = config.tcp_config().into_sender()?;
        Ok(Self {
            config,
            sender,
            store: None,
        })
    }

    /// Attaches an event store; every successfully issued command will be
    /// recorded into it.
    #[must_use]
    pub fn with_store(mut self, store: EventStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.config.device_id()
    }

    /// Returns the whitelist of commands this device supports.
    #[must_use]
    pub fn commands(&self) -> &'static [PioneerCommand] {
        &PioneerCommand::ALL
    }

    /// Sends a command to the receiver.
    ///
    /// Returns the device's reply, if it sent one; a silent device is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be reached or the exchange
    /// fails mid-flight. Nothing is recorded in that case.
    pub async fn send(&self, command: PioneerCommand) -> Result<CommandReply> {
        let reply = self.sender.send_command(&command).await?;
        tracing::debug!(
            device = %self.config.device_id(),
            command = command.name(),
            "Command issued"
        );

        if let Some(store) = &self.store {
            store.add_record(
                self.config.device_id(),
                command.name(),
                Value::String(command.wire_code().to_string()),
            );
        }

        Ok(reply)
    }

    /// Translates a semantic command name and sends it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unknown`](crate::error::CommandError::Unknown)
    /// for names outside the whitelist, or a protocol error if delivery
    /// fails.
    pub async fn send_named(&self, name: &str) -> Result<CommandReply> {
        let command: PioneerCommand = name.parse()?;
        self.send(command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_telnet_port() {
        let config = DeviceConfig::new("amp", "192.168.1.40");
        assert_eq!(config.port(), DeviceConfig::DEFAULT_PORT);
        assert_eq!(config.host(), "192.168.1.40");
    }

    #[test]
    fn adapter_exposes_command_whitelist() {
        let receiver = PioneerReceiver::new(DeviceConfig::new("amp", "localhost")).unwrap();
        assert_eq!(receiver.commands().len(), 4);
        assert_eq!(receiver.device_id(), "amp");
    }

    #[test]
    fn empty_host_is_rejected() {
        assert!(PioneerReceiver::new(DeviceConfig::new("amp", "")).is_err());
    }

    #[tokio::test]
    async fn unknown_named_command_is_rejected_before_connecting() {
        let receiver = PioneerReceiver::new(DeviceConfig::new("amp", "localhost")).unwrap();
        let err = receiver.send_named("VOL_MAX").await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Command(crate::error::CommandError::Unknown(_))
        ));
    }
}
