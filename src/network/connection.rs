//! Collector Connection
//!
//! Owns one TCP connection for a single request/response exchange.

use std::io::{self, ErrorKind, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::config::SenderConfig;
use crate::error::{Result, SenderError};
use crate::protocol::{check_signature, validate_header, RawFrame, LENGTH_SIZE, SIGNATURE_SIZE};
use super::{reliable_read, ReadPhase, ReadPolicy};

/// A connection to the collector
///
/// The socket is closed when the connection is dropped, which happens
/// exactly once whether the exchange succeeded or not.
pub struct Connection {
    stream: TcpStream,

    /// Retry policy for response reads
    policy: ReadPolicy,

    /// Peer address for logging
    peer_addr: SocketAddr,
}

impl Connection {
    /// Connect to the configured collector
    ///
    /// Tries every resolved address with the connect timeout, then applies
    /// read/write timeouts to the established stream.
    pub fn open(config: &SenderConfig) -> Result<Self> {
        let addr = config.server_addr();
        let stream = connect(&addr, config)?;

        let peer_addr = stream.peer_addr()?;

        // Disable Nagle's algorithm, the request goes out in one write
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(config.read_timeout()))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(config.write_timeout()))?;
        }

        let deadline = (config.read_timeout_ms > 0).then(|| config.read_timeout());
        let policy = ReadPolicy::new(config.retry_backoff(), deadline);

        tracing::debug!("Connection established to {}", peer_addr);

        Ok(Self {
            stream,
            policy,
            peer_addr,
        })
    }

    /// Write a complete frame
    pub fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.stream.write_all(frame).map_err(SenderError::Send)?;
        self.stream.flush().map_err(SenderError::Send)?;

        tracing::trace!("Sent {} bytes to {}", frame.len(), self.peer_addr);
        Ok(())
    }

    /// Read a complete response frame
    ///
    /// The signature is checked as soon as it arrives and the length before
    /// the body is read, so a garbled header never drives the body read.
    pub fn read_frame(&mut self) -> Result<RawFrame> {
        let mut signature = [0u8; SIGNATURE_SIZE];
        reliable_read(&mut self.stream, &mut signature, ReadPhase::Header, &self.policy)?;
        check_signature(&signature)?;

        let mut length = [0u8; LENGTH_SIZE];
        reliable_read(&mut self.stream, &mut length, ReadPhase::Length, &self.policy)?;
        let length = u64::from_le_bytes(length);
        let body_len = validate_header(&signature, length)?;

        let mut body = vec![0u8; body_len];
        reliable_read(&mut self.stream, &mut body, ReadPhase::Body, &self.policy)?;

        tracing::trace!("Received {} byte response from {}", body_len, self.peer_addr);
        Ok(RawFrame::new(signature, length, body))
    }

    /// Get the peer address
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        tracing::debug!("Connection to {} closed", self.peer_addr);
    }
}

/// Connect to the first reachable address `addr` resolves to
fn connect(addr: &str, config: &SenderConfig) -> Result<TcpStream> {
    let connect_err = |source: io::Error| SenderError::Connect {
        addr: addr.to_string(),
        source,
    };

    let candidates = addr.to_socket_addrs().map_err(connect_err)?;

    let mut last_err = None;
    for candidate in candidates {
        // A zero timeout means no timeout, as for reads and writes
        let attempt = if config.connect_timeout_ms > 0 {
            TcpStream::connect_timeout(&candidate, config.connect_timeout())
        } else {
            TcpStream::connect(candidate)
        };

        match attempt {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", candidate, e);
                last_err = Some(e);
            }
        }
    }

    Err(connect_err(last_err.unwrap_or_else(|| {
        io::Error::new(ErrorKind::AddrNotAvailable, "address resolved to nothing")
    })))
}
