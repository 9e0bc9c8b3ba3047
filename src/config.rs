//! Configuration for zbxsend
//!
//! Centralized sender configuration with sensible defaults.

use std::time::Duration;

/// Default timeout for connect, read and write, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Default Zabbix trapper port
pub const DEFAULT_PORT: u16 = 10051;

/// Main configuration for a Sender
#[derive(Debug, Clone)]
pub struct SenderConfig {
    // -------------------------------------------------------------------------
    // Collector Address
    // -------------------------------------------------------------------------
    /// Collector host name or IP address
    pub server_host: String,

    /// Collector TCP port
    pub server_port: u16,

    // -------------------------------------------------------------------------
    // Timeouts
    // -------------------------------------------------------------------------
    /// Connection establishment timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Per-read timeout on the open connection (milliseconds)
    pub read_timeout_ms: u64,

    /// Per-write timeout on the open connection (milliseconds)
    pub write_timeout_ms: u64,

    /// Sleep between retries of a transiently failing read (milliseconds).
    /// `None` falls back to the connect timeout.
    pub retry_backoff_ms: Option<u64>,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: DEFAULT_PORT,
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_TIMEOUT_MS,
            retry_backoff_ms: None,
        }
    }
}

impl SenderConfig {
    /// Create a new config builder
    pub fn builder() -> SenderConfigBuilder {
        SenderConfigBuilder::default()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    /// Backoff used by the reliable-read loop.
    ///
    /// Tied to the connect timeout unless set explicitly.
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms.unwrap_or(self.connect_timeout_ms))
    }

    /// `host:port` string used for resolution and error messages
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Builder for SenderConfig
#[derive(Default)]
pub struct SenderConfigBuilder {
    config: SenderConfig,
}

impl SenderConfigBuilder {
    /// Set the collector host
    pub fn server_host(mut self, host: impl Into<String>) -> Self {
        self.config.server_host = host.into();
        self
    }

    /// Set the collector port
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the read retry backoff (in milliseconds)
    pub fn retry_backoff_ms(mut self, ms: u64) -> Self {
        self.config.retry_backoff_ms = Some(ms);
        self
    }

    pub fn build(self) -> SenderConfig {
        self.config
    }
}
