//! Error type definitions for curve, key and encoding operations

use thiserror::Error as ThisError;

/// Primary error type for ecsig operations
///
/// Every variant names the kind of failure so callers can branch on it
/// without inspecting the message text. Signature verification failures are
/// not errors: `verify` reports them as `false`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A DER structure has the wrong tag, a bad length, or is truncated
    #[error("malformed DER {context}: {message}")]
    MalformedDer {
        context: &'static str,
        message: String,
    },

    /// Bytes were left over after a complete DER structure
    #[error("trailing junk after {context}: {trailing}")]
    TrailingBytes {
        context: &'static str,
        /// Hex dump of the unparsed bytes
        trailing: String,
    },

    /// PEM markers are missing or the body is not valid base64
    #[error("malformed PEM: {message}")]
    MalformedPem { message: String },

    /// The requested curve name or OID is not registered
    #[error(
        "unknown curve {requested}; only the following are available: {}",
        .available.join(", ")
    )]
    UnsupportedCurve {
        requested: String,
        available: Vec<&'static str>,
    },

    /// A point is at infinity, off the curve, or outside the prime-order subgroup
    #[error("invalid point: {message}")]
    InvalidPoint { message: String },

    /// Key material is out of range or structurally invalid
    #[error("invalid key ({context}): {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// A signature did not verify (only raised through the scheme trait)
    #[error("invalid signature ({context}): {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Hex or base64 text could not be decoded
    #[error("invalid encoding ({context}): {message}")]
    InvalidEncoding {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A modular inverse was requested for a non-invertible value
    #[error("{context}: value has no inverse modulo {modulus}")]
    NotInvertible {
        context: &'static str,
        modulus: String,
    },
}

/// Result type for ecsig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::MalformedDer { message, .. } => Self::MalformedDer { context, message },
            Self::TrailingBytes { trailing, .. } => Self::TrailingBytes { context, trailing },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NotInvertible { modulus, .. } => Self::NotInvertible { context, modulus },
            other @ (Self::MalformedPem { .. }
            | Self::UnsupportedCurve { .. }
            | Self::InvalidPoint { .. }) => other,
        }
    }

    /// Shorthand to create a MalformedDer error
    pub fn malformed_der(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedDer {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an InvalidKey error
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an InvalidPoint error
    pub fn invalid_point(message: impl Into<String>) -> Self {
        Self::InvalidPoint {
            message: message.into(),
        }
    }
}
