//! Percent-decoding of host payloads.
//!
//! Every string payload crossing the boundary (source text, field values)
//! arrives percent-encoded from the host. Decoding never fails upward: a
//! malformed payload falls back to the raw string so something can still be
//! displayed.

use std::str::Utf8Error;

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Decode failure for a percent-encoded payload.
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

/// Decode a percent-encoded payload.
pub fn decode_payload(raw: &str) -> Result<String, DecodeError> {
    Ok(percent_decode_str(raw).decode_utf8()?.into_owned())
}

/// Decode a payload, falling back to the raw string on failure.
pub fn decode_or_raw(raw: &str) -> String {
    match decode_payload(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("malformed payload ({}), displaying raw text", e);
            raw.to_string()
        }
    }
}
