//! Error types shared by the rotation algorithms.

/// Result type for rotr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rotr.
///
/// Contract violations (bad shapes, malformed conventions, bad arguments) are
/// reported before any computation happens. Numerical edge cases are never
/// reported as errors; the algorithms resolve them internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A tensor does not have the trailing shape an operation requires.
    #[error("invalid shape for `{arg}`: expected {expected}, got {got:?}")]
    InvalidShape {
        arg: &'static str,
        expected: &'static str,
        got: Vec<usize>,
    },

    /// An Euler angle convention string is malformed.
    #[error("invalid Euler convention {convention:?}: {reason}")]
    InvalidConvention { convention: String, reason: String },

    /// Any other argument contract violation.
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    /// Operand shapes cannot be combined (broadcasting or matmul).
    #[error("incompatible shapes {lhs:?} and {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    /// Failure reported by numr itself.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<numr::error::Error> for Error {
    fn from(err: numr::error::Error) -> Self {
        use numr::error::Error as NumrError;

        match err {
            NumrError::ShapeMismatch { expected, got } => Error::ShapeMismatch {
                lhs: expected,
                rhs: got,
            },
            NumrError::BroadcastError { lhs, rhs } => Error::ShapeMismatch { lhs, rhs },
            NumrError::InvalidArgument { arg, reason } => Error::InvalidArgument { arg, reason },
            other => Error::Backend(other.to_string()),
        }
    }
}
