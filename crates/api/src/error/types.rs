//! Error type definitions for eccrypt operations

use thiserror::Error as ThisError;

/// Primary error type for eccrypt operations
///
/// Every fallible operation either returns a complete result or one of these
/// variants; no variant carries partial output.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The randomness source failed to fill a buffer
    #[error("Random generation error: {context}")]
    RandomnessFailure { context: &'static str },

    /// Every attempt produced an all-zero keystream
    #[error("Degenerate shared secret: {context} (gave up after {attempts} attempts)")]
    DegenerateSharedSecret {
        context: &'static str,
        attempts: usize,
    },

    /// Integrity tag mismatch on decrypt
    #[error("Integrity check failed: {context}")]
    IntegrityFailure { context: &'static str },

    /// Decryption could not complete
    #[error("Decryption failed: {context}")]
    DecryptionFailed { context: &'static str },

    /// Undersized or structurally invalid wire bytes
    #[error("Malformed input: {context}: {reason}")]
    MalformedInput {
        context: &'static str,
        reason: &'static str,
    },

    /// Invalid key error
    #[error("Invalid key: {context}: {reason}")]
    InvalidKey {
        context: &'static str,
        reason: &'static str,
    },

    /// Coordinates that are not a point on the curve, or the identity
    #[error("Invalid point: {context}")]
    InvalidPoint { context: &'static str },

    /// Invalid parameter error
    #[error("{context}: {reason}")]
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for eccrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::RandomnessFailure { .. } => Self::RandomnessFailure { context },
            Self::DegenerateSharedSecret { attempts, .. } => {
                Self::DegenerateSharedSecret { context, attempts }
            }
            Self::IntegrityFailure { .. } => Self::IntegrityFailure { context },
            Self::DecryptionFailed { .. } => Self::DecryptionFailed { context },
            Self::MalformedInput { reason, .. } => Self::MalformedInput { context, reason },
            Self::InvalidKey { reason, .. } => Self::InvalidKey { context, reason },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }

    /// True for the tag-mismatch failure
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::IntegrityFailure { .. })
    }

    /// True for undersized or structurally invalid input
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
