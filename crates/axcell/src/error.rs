//! Error types for the UUID engine and the binding surface.
//!
//! The engine reports [`ParseUuidError`] and [`EntropyError`]; the binding surface wraps
//! them in [`Error`] together with the name of the call that failed, so a host can tell
//! which function or method rejected its arguments.
//!
//! ## Taxonomy
//!
//! ```text
//! Error
//! ├── MalformedInput       recoverable   parse / from_bytes given bad input
//! ├── TypeMismatch         recoverable   receiver or argument of the wrong type
//! ├── ArgumentCount        recoverable   reported as TypeMismatch
//! ├── UnknownMethod        recoverable   reported as TypeMismatch
//! ├── ResourceExhaustion   fatal         randomness source unavailable
//! └── NotInitialized       fatal         registry used before `axcell::init()`
//! ```

use crate::uuid::{BYTE_LEN, CANONICAL_LEN};

/// Result alias used throughout the binding surface.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a textual or binary UUID could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseUuidError {
    #[error("expected {} characters, found {len}", CANONICAL_LEN)]
    InvalidLength { len: usize },
    /// Right length, but not the canonical hyphenated grammar.
    #[error(transparent)]
    Invalid(#[from] ::uuid::Error),
    #[error("expected {} bytes, found {len}", BYTE_LEN)]
    InvalidByteLength { len: usize },
}

/// The operating system's randomness source could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("randomness source unavailable: {0}")]
pub struct EntropyError(pub(crate) String);

/// A failed call through the binding surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{function}: malformed input: {source}")]
    MalformedInput {
        function: &'static str,
        source: ParseUuidError,
    },
    #[error("{function}: {} must be {expected}, not {found}", describe_position(.position))]
    TypeMismatch {
        function: &'static str,
        /// Zero is the receiver, positional arguments count from one.
        position: usize,
        expected: &'static str,
        found: String,
    },
    #[error("{function}() takes {expected} arguments ({found} given)")]
    ArgumentCount {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },
    #[error("{type_name} has no function or method named '{name}'")]
    UnknownMethod { type_name: &'static str, name: String },
    #[error("{function}: {source}")]
    ResourceExhaustion {
        function: &'static str,
        source: EntropyError,
    },
    #[error("type registry used before axcell::init()")]
    NotInitialized,
}

impl Error {
    /// Classifies the error into the categories hosts map onto their own exception types.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::TypeMismatch { .. } | Self::ArgumentCount { .. } | Self::UnknownMethod { .. } => {
                ErrorKind::TypeMismatch
            }
            Self::ResourceExhaustion { .. } => ErrorKind::ResourceExhaustion,
            Self::NotInitialized => ErrorKind::NotInitialized,
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    MalformedInput,
    TypeMismatch,
    ResourceExhaustion,
    NotInitialized,
}

impl ErrorKind {
    /// Whether a caller can reasonably catch this and carry on.
    #[must_use]
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::MalformedInput | Self::TypeMismatch)
    }
}

#[expect(clippy::trivially_copy_pass_by_ref, reason = "called with a field reference")]
fn describe_position(position: &usize) -> String {
    if *position == 0 {
        "receiver".to_owned()
    } else {
        format!("argument {position}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_names_receiver_and_arguments() {
        let receiver = Error::TypeMismatch {
            function: "clone",
            position: 0,
            expected: "axcell.uuid.uuid",
            found: "int".to_owned(),
        };
        assert_eq!(receiver.to_string(), "clone: receiver must be axcell.uuid.uuid, not int");

        let argument = Error::TypeMismatch {
            function: "parse",
            position: 1,
            expected: "string",
            found: "bool".to_owned(),
        };
        assert_eq!(argument.to_string(), "parse: argument 1 must be string, not bool");
    }

    #[test]
    fn only_input_errors_are_recoverable() {
        assert!(ErrorKind::MalformedInput.is_recoverable());
        assert!(ErrorKind::TypeMismatch.is_recoverable());
        assert!(!ErrorKind::ResourceExhaustion.is_recoverable());
        assert!(!Error::NotInitialized.kind().is_recoverable());
    }

    #[test]
    fn entropy_failure_is_fatal_resource_exhaustion() {
        let err = Error::ResourceExhaustion {
            function: "generate",
            source: EntropyError("device not configured".to_owned()),
        };
        assert_eq!(err.kind(), ErrorKind::ResourceExhaustion);
        assert!(!err.kind().is_recoverable());
        assert_eq!(
            err.to_string(),
            "generate: randomness source unavailable: device not configured"
        );
    }

    #[test]
    fn arity_errors_report_as_type_mismatch() {
        let err = Error::ArgumentCount {
            function: "generate",
            expected: "no",
            found: 2,
        };
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "generate() takes no arguments (2 given)");
    }
}
