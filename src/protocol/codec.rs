//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────────────┬──────────────┬─────────────────────────────┐
//! │ "ZBXD" 0x01 (5)  │ Len (8, LE)  │        JSON payload         │
//! └──────────────────┴──────────────┴─────────────────────────────┘
//! ```
//!
//! The same framing is used in both directions.

use std::sync::LazyLock;

use bytes::{BufMut, Bytes, BytesMut};
use regex::Regex;

use crate::error::{Result, SenderError};
use super::{DataPoint, ResultSummary, SubmitRequest, SubmitResponse};

/// Protocol signature: ASCII "ZBXD" followed by protocol flag 0x01
pub const SIGNATURE: [u8; SIGNATURE_SIZE] = *b"ZBXD\x01";

/// Size of the signature field
pub const SIGNATURE_SIZE: usize = 5;

/// Size of the little-endian length field
pub const LENGTH_SIZE: usize = 8;

/// Header size: signature + length
pub const HEADER_SIZE: usize = SIGNATURE_SIZE + LENGTH_SIZE;

/// Maximum payload size accepted from the collector (1 GiB)
pub const MAX_PAYLOAD_SIZE: u64 = 1024 * 1024 * 1024;

/// Splits info text into numeric tokens
static INFO_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]+").expect("info separator pattern is valid"));

// =============================================================================
// Frames
// =============================================================================

/// A frame as received from the peer, before JSON decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub signature: [u8; SIGNATURE_SIZE],

    /// Declared payload length
    pub length: u64,

    pub body: Bytes,
}

impl RawFrame {
    pub fn new(signature: [u8; SIGNATURE_SIZE], length: u64, body: impl Into<Bytes>) -> Self {
        Self {
            signature,
            length,
            body: body.into(),
        }
    }
}

/// Wrap a payload in a frame
///
/// Format: signature (5) + payload_len (8, LE) + payload
pub fn encode_frame(payload: &[u8]) -> Bytes {
    let mut frame = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    frame.put_slice(&SIGNATURE);
    frame.put_u64_le(payload.len() as u64);
    frame.put_slice(payload);
    frame.freeze()
}

/// Reject any signature other than `ZBXD\x01`
pub fn check_signature(signature: &[u8; SIGNATURE_SIZE]) -> Result<()> {
    if *signature != SIGNATURE {
        return Err(SenderError::Protocol(format!(
            "Invalid signature: {:02x?}",
            signature
        )));
    }
    Ok(())
}

/// Check a received header and return the body length to read
///
/// Rejects a foreign signature, a zero length (the collector never sends an
/// empty reply) and lengths above `MAX_PAYLOAD_SIZE`.
pub fn validate_header(signature: &[u8; SIGNATURE_SIZE], length: u64) -> Result<usize> {
    check_signature(signature)?;

    if length == 0 {
        return Err(SenderError::Protocol(
            "Invalid response: zero payload length".to_string(),
        ));
    }

    if length > MAX_PAYLOAD_SIZE {
        return Err(SenderError::Protocol(format!(
            "Response payload too large: {} bytes (max {})",
            length, MAX_PAYLOAD_SIZE
        )));
    }

    usize::try_from(length).map_err(|_| {
        SenderError::Protocol(format!("Payload length {} does not fit in memory", length))
    })
}

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a batch of data points as a complete sender-data frame
pub fn encode_request(points: &[DataPoint]) -> Result<Bytes> {
    let payload = serde_json::to_vec(&SubmitRequest::new(points))
        .map_err(|e| SenderError::Serialization(e.to_string()))?;

    Ok(encode_frame(&payload))
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a received frame into the collector's response
pub fn decode_response(frame: &RawFrame) -> Result<SubmitResponse> {
    let length = validate_header(&frame.signature, frame.length)?;

    if frame.body.len() != length {
        return Err(SenderError::Protocol(format!(
            "Body length mismatch: header declares {}, got {}",
            length,
            frame.body.len()
        )));
    }

    serde_json::from_slice(&frame.body)
        .map_err(|e| SenderError::Protocol(format!("Malformed response JSON: {}", e)))
}

/// Parse the collector's info text
///
/// Expected shape: `processed: 1; failed: 0; total: 1; seconds spent: 0.000053`.
/// The text is split on every run of characters that are not digits or `.`,
/// and tokens 1..=4 are taken positionally. Missing or unparsable tokens
/// count as zero instead of failing; an unexpected format therefore shows up
/// as zero counts rather than an error.
pub fn parse_info(info: &str) -> ResultSummary {
    let tokens: Vec<&str> = INFO_SEPARATOR.split(info).collect();

    let summary = ResultSummary {
        processed: int_token(&tokens, 1),
        failed: int_token(&tokens, 2),
        total: int_token(&tokens, 3),
        spent_seconds: tokens
            .get(4)
            .and_then(|t| t.parse::<f64>().ok())
            .unwrap_or(0.0),
    };

    if tokens.len() < 5 {
        tracing::debug!("Info text is missing fields, defaulting to zero: {:?}", info);
    }

    summary
}

fn int_token(tokens: &[&str], index: usize) -> u64 {
    tokens
        .get(index)
        .and_then(|t| t.parse::<u64>().ok())
        .unwrap_or(0)
}
