// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw TCP line-protocol implementation.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandReply, Protocol};

/// Configuration for a raw TCP device socket.
///
/// Each command is an independent exchange: connect, write one
/// CRLF-terminated line, read at most one reply chunk, shut down. No
/// persistent connection is kept.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use domolink::protocol::TcpConfig;
///
/// let config = TcpConfig::new("192.168.1.40", 8102)
///     .with_connect_timeout(Duration::from_secs(2))
///     .with_read_timeout(Duration::from_millis(500));
/// assert_eq!(config.port(), 8102);
/// ```
#[derive(Debug, Clone)]
pub struct TcpConfig {
    host: String,
    port: u16,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl TcpConfig {
    /// Default connection timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    /// Default time to wait for a reply before treating the device as
    /// silent.
    pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

    /// Creates a new configuration for the specified host and port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: Self::DEFAULT_READ_TIMEOUT,
        }
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

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the connection timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the reply read timeout.
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Creates a `TcpSender` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty.
    pub fn into_sender(self) -> Result<TcpSender, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("empty host".to_string()));
        }
        Ok(TcpSender { config: self })
    }
}

/// Sender for devices speaking a CRLF line protocol over raw TCP.
///
/// # Examples
///
/// ```no_run
/// use domolink::command::PioneerCommand;
/// use domolink::protocol::{Protocol, TcpSender};
///
/// # async fn example() -> domolink::Result<()> {
/// let sender = TcpSender::new("192.168.1.40", 8102)?;
/// let reply = sender.send_command(&PioneerCommand::Mute).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TcpSender {
    config: TcpConfig,
}

impl TcpSender {
    /// Creates a sender with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ProtocolError> {
        TcpConfig::new(host, port).into_sender()
    }

    /// Returns the sender's configuration.
    #[must_use]
    pub fn config(&self) -> &TcpConfig {
        &self.config
    }

    /// Runs one connect/write/read/shutdown exchange with the device.
    async fn exchange(&self, wire: &str) -> Result<CommandReply, ProtocolError> {
        let addr = (self.config.host.clone(), self.config.port);
        let mut stream = match timeout(self.config.connect_timeout, TcpStream::connect(addr)).await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(err)) => return Err(ProtocolError::ConnectionFailed(err.to_string())),
            Err(_) => {
                let ms = u64::try_from(self.config.connect_timeout.as_millis())
                    .unwrap_or(u64::MAX);
                return Err(ProtocolError::Timeout(ms));
            }
        };
        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            line = wire.trim_end(),
            "Connected, sending command line"
        );

        stream.write_all(wire.as_bytes()).await?;

        let mut buf = vec![0u8; 256];
        let reply = match timeout(self.config.read_timeout, stream.read(&mut buf)).await {
            Ok(Ok(0)) => CommandReply::silent(),
            Ok(Ok(n)) => CommandReply::new(String::from_utf8_lossy(&buf[..n]).trim()),
            Ok(Err(err)) => return Err(ProtocolError::Io(err)),
            // No reply within the window: the device is a sink.
            Err(_) => CommandReply::silent(),
        };

        match reply.body() {
            Some(body) => tracing::debug!(reply = body, "Device replied"),
            None => tracing::debug!("Device stayed silent"),
        }

        let _ = stream.shutdown().await;
        Ok(reply)
    }
}

impl Protocol for TcpSender {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandReply, ProtocolError> {
        self.exchange(&command.to_wire()).await
    }

    async fn send_raw(&self, line: &str) -> Result<CommandReply, ProtocolError> {
        self.exchange(&format!("{line}\r\n")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TcpConfig::new("192.168.1.40", 8102);
        assert_eq!(config.host(), "192.168.1.40");
        assert_eq!(config.port(), 8102);
        assert_eq!(config.connect_timeout(), TcpConfig::DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(config.read_timeout(), TcpConfig::DEFAULT_READ_TIMEOUT);
    }

    #[test]
    fn config_setters() {
        let config = TcpConfig::new("host", 23)
            .with_connect_timeout(Duration::from_secs(2))
            .with_read_timeout(Duration::from_millis(250));
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.read_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn empty_host_is_rejected() {
        let err = TcpSender::new("", 8102).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn connect_to_unreachable_host_fails() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let sender = TcpConfig::new("192.0.2.1", 8102)
            .with_connect_timeout(Duration::from_millis(50))
            .into_sender()
            .unwrap();

        let err = sender.send_raw("MZ").await.unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Timeout(_) | ProtocolError::ConnectionFailed(_)
        ));
    }
}
