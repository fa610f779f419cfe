//! Error handling for PKE operations.

use core::fmt;

use eccrypt_algorithms::error::Error as PrimitiveError;
use eccrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Primitive(PrimitiveError),
    Api(CoreError),
    /// Undersized or structurally invalid wire bytes
    MalformedInput(&'static str),
    /// Tag mismatch on decrypt
    IntegrityFailure,
    DecryptionFailed(&'static str),
    RandomnessFailure,
    /// All-zero keystream after the given number of attempts
    DegenerateSharedSecret { attempts: usize },
    InvalidKey(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::MalformedInput(reason) => write!(f, "Malformed PKE input: {}", reason),
            Error::IntegrityFailure => write!(f, "PKE integrity check failed"),
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
            Error::RandomnessFailure => write!(f, "PKE random source failed"),
            Error::DegenerateSharedSecret { attempts } => {
                write!(f, "PKE shared secret degenerate after {} attempts", attempts)
            }
            Error::InvalidKey(reason) => write!(f, "Invalid PKE key: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

impl From<rand::Error> for Error {
    fn from(_: rand::Error) -> Self {
        Error::RandomnessFailure
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::MalformedInput(reason) => CoreError::MalformedInput {
                context: "ECIES",
                reason,
            },
            Error::IntegrityFailure => CoreError::IntegrityFailure {
                context: "ECIES Decryption",
            },
            Error::DecryptionFailed(_) => CoreError::DecryptionFailed {
                context: "ECIES Decryption",
            },
            Error::RandomnessFailure => CoreError::RandomnessFailure {
                context: "ECIES random scalar",
            },
            Error::DegenerateSharedSecret { attempts } => CoreError::DegenerateSharedSecret {
                context: "ECIES Encryption",
                attempts,
            },
            Error::InvalidKey(reason) => CoreError::InvalidKey {
                context: "ECIES",
                reason,
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
