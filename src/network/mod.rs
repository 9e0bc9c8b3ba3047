//! Network Module
//!
//! TCP transport to the collector.
//!
//! ## Lifecycle
//! - One connection per request, opened and closed inside a single call
//! - Connect with timeout, write the whole frame
//! - Read signature, length and body with a reliable-read loop

mod connection;
mod reliable;

pub use connection::Connection;
pub use reliable::{reliable_read, ReadPhase, ReadPolicy};
