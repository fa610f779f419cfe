//! Error handling for eccrypt primitives

use core::fmt;

use eccrypt_api::Error as CoreError;

/// The error type for eccrypt primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Coordinates are not a point on the curve, or the result is the identity
    Point {
        /// Curve on which the check failed
        curve: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// KDF output consisted only of zero bytes
    DegenerateOutput {
        /// KDF that produced the output
        algorithm: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for eccrypt primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected at most {}, got {}",
                    context, expected, actual
                )
            }
            Error::Point { curve, details } => {
                write!(f, "Invalid {} point: {}", curve, details)
            }
            Error::DegenerateOutput { algorithm } => {
                write!(f, "{} produced an all-zero output", algorithm)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { curve, .. } => CoreError::InvalidPoint { context: curve },
            Error::DegenerateOutput { algorithm } => CoreError::DegenerateSharedSecret {
                context: algorithm,
                attempts: 1,
            },
        }
    }
}
