//! Sender Module
//!
//! The public entry point for submitting data points.
//!
//! ## Responsibilities
//! - Encode the caller's batch into a request frame
//! - Run one connect/send/receive exchange with the collector
//! - Decode the reply into a `SubmitResponse`

use crate::config::SenderConfig;
use crate::error::Result;
use crate::network::Connection;
use crate::protocol::{decode_response, encode_request, DataPoint, SubmitResponse};

/// Client for a Zabbix trapper
///
/// ## Concurrency Model
///
/// Holds only configuration. Every call opens its own connection and owns
/// its own buffers, so one `Sender` can be shared across threads freely.
/// A call blocks for the whole round trip, bounded by the configured
/// connect and read timeouts.
#[derive(Debug, Clone)]
pub struct Sender {
    config: SenderConfig,
}

impl Sender {
    /// Create a sender with default timeouts (3000 ms)
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_config(
            SenderConfig::builder()
                .server_host(host)
                .server_port(port)
                .build(),
        )
    }

    /// Create a sender with explicit connect and read timeouts (milliseconds)
    pub fn with_timeouts(
        host: impl Into<String>,
        port: u16,
        connect_timeout_ms: u64,
        read_timeout_ms: u64,
    ) -> Self {
        Self::with_config(
            SenderConfig::builder()
                .server_host(host)
                .server_port(port)
                .connect_timeout_ms(connect_timeout_ms)
                .read_timeout_ms(read_timeout_ms)
                .build(),
        )
    }

    pub fn with_config(config: SenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Send a single value
    pub fn send(
        &self,
        host: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<SubmitResponse> {
        self.send_batch(&[DataPoint::new(host, key, value)])
    }

    /// Send a batch of values in one request
    ///
    /// Data points are submitted in slice order. The connection is closed
    /// before the reply is decoded, and on every error path.
    pub fn send_batch(&self, items: &[DataPoint]) -> Result<SubmitResponse> {
        let frame = encode_request(items)?;

        let raw = {
            let mut connection = Connection::open(&self.config)?;
            connection.send_frame(&frame)?;
            connection.read_frame()?
        };

        let response = decode_response(&raw)?;

        tracing::debug!(
            "Sent {} data points to {}: {} ({})",
            items.len(),
            self.config.server_addr(),
            response.response(),
            response.info()
        );

        Ok(response)
    }
}
