//! Error types for the transport layer and the session engine.

use std::io;

use thiserror::Error;

/// Failures that can occur while reading or writing raw lines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line exceeds maximum length: {preview}...")]
    LineTooLong { preview: String },

    #[error("illegal control character {ch:#04x} in line: {preview}...")]
    IllegalControlChar { ch: u8, preview: String },
}

/// Failures surfaced by the session engine to its caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("not connected")]
    NotConnected,

    #[error("a request of this kind is already in flight")]
    BusyDuplicate,

    #[error("aggregated response timed out")]
    AggTimeout,

    #[error("disconnected from server")]
    Disconnected,

    #[error("SASL authentication failed: {0}")]
    SaslFailed(String),

    #[error("PING timeout: server did not respond in time")]
    PingTimeout,

    #[error("failed to open transport: {0}")]
    TransportOpenFailed(String),

    #[error("transport read failed: {0}")]
    TransportReadFailed(#[from] TransportError),

    #[error("transport write failed: {0}")]
    TransportWriteFailed(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
