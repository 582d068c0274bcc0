//! Eid-tagged error types.
//!
//! Every guard failure is an [`EidError`]. The variant says which kind of
//! precondition was violated; the payload is always a [`Violation`] holding
//! the [`Eid`] of the failing check, its diagnostic message and, for
//! wrapped failures, the underlying cause.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::identifier::Eid;

/// Boxed underlying error carried by a [`Violation`].
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Capability of carrying an [`Eid`].
pub trait EidContainer {
    /// Returns the Eid attached to this value.
    fn eid(&self) -> &Eid;
}

/// Payload-free discriminant of [`EidError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalArgument,
    IllegalState,
    NullReference,
    IndexOutOfBounds,
    Runtime,
}

impl ErrorKind {
    /// Returns a short, log-friendly name for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::IllegalArgument => "illegal_argument",
            ErrorKind::IllegalState => "illegal_state",
            ErrorKind::NullReference => "null_reference",
            ErrorKind::IndexOutOfBounds => "index_out_of_bounds",
            ErrorKind::Runtime => "runtime",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed check: the Eid, the rendered message and an optional cause.
///
/// Displays as `[<id>|<message>]`.
#[derive(Debug)]
pub struct Violation {
    eid: Eid,
    message: String,
    cause: Option<Cause>,
}

impl Violation {
    /// Creates a violation without a cause.
    pub fn new(eid: Eid, message: impl Into<String>) -> Self {
        Self {
            eid,
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a violation wrapping an underlying error.
    pub fn with_cause(eid: Eid, message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            eid,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Returns the diagnostic message, without the Eid decoration.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.eid.id(), self.message)
    }
}

impl StdError for Violation {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl EidContainer for Violation {
    fn eid(&self) -> &Eid {
        &self.eid
    }
}

/// The guarded error family.
#[derive(Debug, Error)]
pub enum EidError {
    /// A caller passed an argument that does not satisfy the check.
    #[error(transparent)]
    IllegalArgument(Violation),

    /// The receiver is not in a state that permits the operation.
    #[error(transparent)]
    IllegalState(Violation),

    /// A required value was absent.
    #[error(transparent)]
    NullReference(Violation),

    /// An index fell outside `[0, size)`.
    #[error(transparent)]
    IndexOutOfBounds(Violation),

    /// Generic failure, typically wrapping a cause.
    #[error(transparent)]
    Runtime(Violation),
}

impl EidError {
    /// Wraps a violation in the variant matching `kind`.
    #[must_use]
    pub fn new(kind: ErrorKind, violation: Violation) -> Self {
        match kind {
            ErrorKind::IllegalArgument => EidError::IllegalArgument(violation),
            ErrorKind::IllegalState => EidError::IllegalState(violation),
            ErrorKind::NullReference => EidError::NullReference(violation),
            ErrorKind::IndexOutOfBounds => EidError::IndexOutOfBounds(violation),
            ErrorKind::Runtime => EidError::Runtime(violation),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EidError::IllegalArgument(_) => ErrorKind::IllegalArgument,
            EidError::IllegalState(_) => ErrorKind::IllegalState,
            EidError::NullReference(_) => ErrorKind::NullReference,
            EidError::IndexOutOfBounds(_) => ErrorKind::IndexOutOfBounds,
            EidError::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Returns the violation payload.
    #[must_use]
    pub fn violation(&self) -> &Violation {
        match self {
            EidError::IllegalArgument(v)
            | EidError::IllegalState(v)
            | EidError::NullReference(v)
            | EidError::IndexOutOfBounds(v)
            | EidError::Runtime(v) => v,
        }
    }

    /// Returns the diagnostic message, without the Eid decoration.
    #[must_use]
    pub fn message(&self) -> &str {
        self.violation().message()
    }
}

impl EidContainer for EidError {
    fn eid(&self) -> &Eid {
        self.violation().eid()
    }
}

/// Error returned by the precondition guards.
#[derive(Debug, Error)]
pub enum PreconditionError {
    /// The check failed.
    #[error(transparent)]
    Violated(#[from] EidError),

    /// The guard was handed no Eid at all.
    #[error("Pass not-null Eid to EidPreconditions first!")]
    MissingEid,
}

impl PreconditionError {
    /// Returns the kind of the violation, or `None` for [`PreconditionError::MissingEid`].
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            PreconditionError::Violated(err) => Some(err.kind()),
            PreconditionError::MissingEid => None,
        }
    }

    /// Returns the Eid of the violation, if there is one.
    #[must_use]
    pub fn eid(&self) -> Option<&Eid> {
        match self {
            PreconditionError::Violated(err) => Some(err.eid()),
            PreconditionError::MissingEid => None,
        }
    }

    /// Returns true if this error came from the guarded family.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        matches!(self, PreconditionError::Violated(_))
    }

    /// Unwraps the guarded error, if any.
    #[must_use]
    pub fn into_eid_error(self) -> Option<EidError> {
        match self {
            PreconditionError::Violated(err) => Some(err),
            PreconditionError::MissingEid => None,
        }
    }
}
