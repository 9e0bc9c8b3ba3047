//! Request definitions
//!
//! Data points and the sender-data request that wraps them.

use serde::{Deserialize, Serialize};

/// Discriminator value identifying a sender-data request
pub const SENDER_DATA_REQUEST: &str = "sender data";

/// One metric sample for a monitored host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Host name as configured in the collector
    pub host: String,

    /// Item key
    pub key: String,

    /// Item value, always transmitted as a string
    pub value: String,
}

impl DataPoint {
    pub fn new(host: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Sender-data request body
///
/// Borrows the caller's batch; data points are serialized in slice order.
#[derive(Debug, Serialize)]
pub struct SubmitRequest<'a> {
    pub request: &'static str,
    pub data: &'a [DataPoint],
}

impl<'a> SubmitRequest<'a> {
    pub fn new(data: &'a [DataPoint]) -> Self {
        Self {
            request: SENDER_DATA_REQUEST,
            data,
        }
    }
}
