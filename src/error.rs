//! Error types for record storage and the wire codec.

use thiserror::Error;

/// Errors that can occur while decoding a shared record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The string did not decompress to text.
    #[error("decompression failed")]
    DecompressionFailed,
    /// The payload has no version tag and is not a legacy JSON record.
    #[error("payload is not a recognised record")]
    InvalidJson,
    /// The legacy payload names an unknown ruleset.
    #[error("unknown game type index {0}")]
    UnknownGameType(u8),
}

/// Errors that can occur in the record history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// No record with this identifier.
    #[error("record not found")]
    NotFound,
    /// A record with this identifier is already stored.
    #[error("duplicate record id")]
    DuplicateId,
}
