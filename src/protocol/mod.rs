//! Protocol Module
//!
//! Defines the Zabbix sender wire protocol.
//!
//! ## Frame Format
//! ```text
//! ┌──────────────────┬──────────────┬─────────────────────────────┐
//! │ Signature (5)    │ Len (8, LE)  │        JSON payload         │
//! └──────────────────┴──────────────┴─────────────────────────────┘
//! ```
//!
//! ### Request Payload
//! ```text
//! {"request":"sender data","data":[{"host":..,"key":..,"value":..}, ...]}
//! ```
//!
//! ### Response Payload
//! ```text
//! {"response":"success","info":"processed: 1; failed: 0; total: 1; seconds spent: 0.000053"}
//! ```

mod request;
mod response;
mod codec;

pub use request::{DataPoint, SubmitRequest, SENDER_DATA_REQUEST};
pub use response::{ResultSummary, SubmitResponse};
pub use codec::{
    check_signature, decode_response, encode_frame, encode_request, parse_info, validate_header,
    RawFrame, HEADER_SIZE, LENGTH_SIZE, MAX_PAYLOAD_SIZE, SIGNATURE, SIGNATURE_SIZE,
};
