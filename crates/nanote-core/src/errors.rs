use thiserror::Error;

/// Errors produced while encoding text into an amount or decoding it back.
///
/// Every variant is a definite outcome: no operation in this crate returns a
/// partially decoded message alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NanoteError {
    /// Input is not of the expected text kind (non UTF-8 bytes, non-digit checksum input).
    #[error("{field} ('{value}') is not valid input")]
    InvalidInputType {
        /// Name of the rejected argument.
        field: &'static str,
        /// Offending value, lossily rendered.
        value: String,
    },
    /// The message holds characters that no catalog entry contains.
    #[error("no charset covers the characters {unsupported:?}")]
    NoCoveringCharset {
        /// Characters outside every charset, in order of first appearance.
        unsupported: String,
    },
    /// The embedded checksum digit does not match the charset index.
    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Checksum recomputed from the index digits.
        expected: u8,
        /// Checksum digit carried by the amount.
        found: u8,
    },
    /// The amount does not have the required digit/point shape.
    #[error("malformed amount '{value}': {reason}")]
    MalformedAmount {
        /// Offending amount string.
        value: String,
        /// Which shape rule was violated.
        reason: &'static str,
    },
    /// Once index and checksum are stripped, the amount lies below the protocol floor.
    #[error("amount value {value} is below the minimum offset")]
    BelowMinimumOffset {
        /// Value digits that remained after stripping index and checksum.
        value: String,
    },
    /// The recovered charset index has no catalog entry.
    #[error("charset index {index} is out of range (catalog holds {len})")]
    IndexOutOfRange {
        /// Recovered index.
        index: usize,
        /// Number of addressable entries.
        len: usize,
    },
    /// Protocol constants cannot produce decodable amounts.
    #[error("invalid protocol {field} ({value})")]
    InvalidProtocol {
        /// Protocol field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

impl NanoteError {
    /// Stable code naming the failure kind, suitable for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            NanoteError::InvalidInputType { .. } => "InvalidInputType",
            NanoteError::NoCoveringCharset { .. } => "NoCoveringCharset",
            NanoteError::ChecksumMismatch { .. } => "ChecksumMismatch",
            NanoteError::MalformedAmount { .. } => "MalformedAmount",
            NanoteError::BelowMinimumOffset { .. } => "BelowMinimumOffset",
            NanoteError::IndexOutOfRange { .. } => "IndexOutOfRange",
            NanoteError::InvalidProtocol { .. } => "InvalidProtocol",
        }
    }
}
