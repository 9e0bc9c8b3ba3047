//! # zbxsend
//!
//! A blocking client for the Zabbix sender protocol:
//! - `ZBXD\x01` framing with a little-endian length prefix
//! - JSON request and response bodies
//! - Reliable reads that survive partial reads and transient socket errors
//! - One TCP connection per request, closed on every exit path
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Sender                               │
//! │              send(host, key, value) / send_batch             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │   Network   │
//!   │   (Codec)   │          │ (Transport) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  Collector  │
//!                           │ (TCP 10051) │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use zbxsend::Sender;
//!
//! let sender = Sender::new("127.0.0.1", 10051);
//! let response = sender.send("web-01", "app.requests", "42")?;
//! println!("processed {} of {}", response.processed(), response.total());
//! # Ok::<(), zbxsend::SenderError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod sender;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SenderError};
pub use config::SenderConfig;
pub use protocol::{DataPoint, ResultSummary, SubmitResponse};
pub use sender::Sender;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of zbxsend
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
