//! Response definitions
//!
//! The collector's reply and the summary derived from its info text.

use std::sync::OnceLock;

use serde::Deserialize;

use super::codec::parse_info;

/// Counts reported by the collector for one request
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResultSummary {
    pub processed: u64,
    pub failed: u64,
    pub total: u64,

    /// Server-side processing time, fractional seconds
    pub spent_seconds: f64,
}

impl ResultSummary {
    /// Every submitted value was processed
    pub fn is_success(&self) -> bool {
        self.processed == self.total
    }
}

/// Decoded reply body: `{"response": .., "info": ..}`
///
/// Missing fields decode as empty strings. The summary is parsed from
/// `info` on first access and cached afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    response: String,

    #[serde(default)]
    info: String,

    #[serde(skip)]
    summary: OnceLock<ResultSummary>,
}

impl SubmitResponse {
    pub fn new(response: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            info: info.into(),
            summary: OnceLock::new(),
        }
    }

    /// Raw `response` field, normally `"success"`
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Raw `info` text
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn summary(&self) -> &ResultSummary {
        self.summary.get_or_init(|| parse_info(&self.info))
    }

    pub fn is_success(&self) -> bool {
        self.summary().is_success()
    }

    pub fn processed(&self) -> u64 {
        self.summary().processed
    }

    pub fn failed(&self) -> u64 {
        self.summary().failed
    }

    pub fn total(&self) -> u64 {
        self.summary().total
    }

    pub fn spent_seconds(&self) -> f64 {
        self.summary().spent_seconds
    }
}
