//! Reliable reads
//!
//! Fills a buffer completely or fails. Only transient socket conditions are
//! retried; a clean close or any other error ends the read.

use std::fmt;
use std::io::{self, ErrorKind, Read};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Result, SenderError};

/// Which part of the response frame is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPhase {
    /// 5-byte signature
    Header,

    /// 8-byte payload length
    Length,

    /// JSON payload
    Body,
}

impl fmt::Display for ReadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadPhase::Header => "header",
            ReadPhase::Length => "length",
            ReadPhase::Body => "body",
        };
        f.write_str(name)
    }
}

/// Retry behaviour for transient read failures
#[derive(Debug, Clone, Copy)]
pub struct ReadPolicy {
    /// Sleep before retrying a transiently failed read
    pub backoff: Duration,

    /// Upper bound on time spent retrying without progress. The clock
    /// restarts whenever bytes arrive, so a slow but steady peer is not cut
    /// off. `None` retries until data or a fatal error arrives.
    pub deadline: Option<Duration>,
}

impl ReadPolicy {
    pub fn new(backoff: Duration, deadline: Option<Duration>) -> Self {
        Self { backoff, deadline }
    }
}

/// Read exactly `buf.len()` bytes from `reader`
///
/// Receives into the unfilled tail of `buf` until it is full. A zero-byte
/// read before that point means the peer closed the connection and fails
/// with `ConnectionClosed`; the partially filled buffer is never returned.
/// Transient errors (`WouldBlock`, and on Unix `ENOBUFS`/`EINPROGRESS`)
/// sleep for `policy.backoff` and retry, `Interrupted` retries at once.
/// Any other error is returned as `Socket`.
pub fn reliable_read<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    phase: ReadPhase,
    policy: &ReadPolicy,
) -> Result<()> {
    let expected = buf.len();
    let mut last_progress = Instant::now();
    let mut received = 0;

    while received < expected {
        match reader.read(&mut buf[received..]) {
            Ok(0) => {
                return Err(SenderError::ConnectionClosed {
                    phase,
                    received,
                    expected,
                });
            }
            Ok(n) => {
                received += n;
                last_progress = Instant::now();
                tracing::trace!("Read {} bytes of {} ({}/{})", n, phase, received, expected);
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(ref e) if is_transient(e) => {
                if let Some(deadline) = policy.deadline {
                    if last_progress.elapsed() >= deadline {
                        return Err(SenderError::Socket(io::Error::new(
                            ErrorKind::TimedOut,
                            format!(
                                "no progress reading {} for {:?} ({}/{} bytes)",
                                phase, deadline, received, expected
                            ),
                        )));
                    }
                }
                tracing::warn!(
                    "Transient error reading {}: {}, retrying in {:?}",
                    phase,
                    e,
                    policy.backoff
                );
                thread::sleep(policy.backoff);
            }
            Err(e) => return Err(SenderError::Socket(e)),
        }
    }

    Ok(())
}

/// Socket buffer empty or out of buffer space, try again later
fn is_transient(e: &io::Error) -> bool {
    e.kind() == ErrorKind::WouldBlock || is_transient_os_error(e.raw_os_error())
}

#[cfg(unix)]
fn is_transient_os_error(errno: Option<i32>) -> bool {
    matches!(errno, Some(libc::ENOBUFS) | Some(libc::EINPROGRESS))
}

#[cfg(not(unix))]
fn is_transient_os_error(_errno: Option<i32>) -> bool {
    false
}
