//! Error types for zbxsend
//!
//! Every failure of a send call surfaces as one distinct `SenderError`
//! variant. Nothing is translated or swallowed on the way up.

use thiserror::Error;

use crate::network::ReadPhase;

/// Result type alias using SenderError
pub type Result<T> = std::result::Result<T, SenderError>;

/// Unified error type for sender operations
#[derive(Debug, Error)]
pub enum SenderError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connect error: cannot reach {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Send error: {0}")]
    Send(#[source] std::io::Error),

    #[error("Connection closed by peer while reading {phase} ({received} of {expected} bytes)")]
    ConnectionClosed {
        phase: ReadPhase,
        received: usize,
        expected: usize,
    },

    #[error("Socket error: {0}")]
    Socket(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SenderError {
    /// True for failures raised before any byte reached the collector
    pub fn is_connect(&self) -> bool {
        matches!(self, SenderError::Connect { .. })
    }

    /// True when the collector hung up before a full reply arrived
    pub fn is_connection_closed(&self) -> bool {
        matches!(self, SenderError::ConnectionClosed { .. })
    }

    /// True for transport failures other than a clean close, including
    /// read timeouts
    pub fn is_socket(&self) -> bool {
        matches!(self, SenderError::Socket(_))
    }

    /// True for malformed replies (signature, length or JSON)
    pub fn is_protocol(&self) -> bool {
        matches!(self, SenderError::Protocol(_))
    }
}
