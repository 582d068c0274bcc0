//! Eid-tagged precondition guards.
//!
//! Every guard takes the Eid as `impl Into<EidSource>`, so a raw identifier,
//! an [`Eid`] or an `Option<Eid>` all work. Raw identifiers are turned into
//! an Eid only when the check fails, attributed to the guard's caller.
//!
//! ```ignore
//! use eid::preconditions::{check_argument_msg, check_not_null};
//! use eid::{Arg, PreconditionError};
//!
//! fn withdraw(account: Option<&Account>, amount: i64) -> Result<(), PreconditionError> {
//!     let account = check_not_null(account, "20150718:075046")?;
//!     check_argument_msg(amount > 0, "20150718:075101", "amount was %d", &[Arg::from(amount)])?;
//!     // ...
//! }
//! ```

use std::panic::Location;

use tracing::debug;

use crate::config::EidConfig;
use crate::error::{Cause, EidError, ErrorKind, PreconditionError, Violation};
use crate::format::{render_message, Arg};
use crate::identifier::{Eid, EidSource};

/// Eid reported by [`Preconditions::instantiate`].
pub const NOT_INSTANTIABLE_EID: &str = "20150718:083450";

/// Namespace type for the guards. It has no values.
pub enum Preconditions {}

impl Preconditions {
    /// Always fails: the guards are free functions and need no instance.
    #[track_caller]
    pub fn instantiate() -> Result<Self, EidError> {
        let eid = Eid::sentinel(NOT_INSTANTIABLE_EID, Location::caller());
        Err(EidError::Runtime(Violation::new(
            eid,
            "This should not be accessed",
        )))
    }
}

enum Message<'a> {
    Default,
    Formatted(&'a str, &'a [Arg]),
    Text(String),
}

impl Message<'_> {
    fn render(self) -> String {
        match self {
            Message::Default => EidConfig::current().default_message.clone(),
            Message::Formatted(format, args) => render_message(format, args),
            Message::Text(text) => text,
        }
    }

    fn or_text(self, text: impl FnOnce() -> String) -> Self {
        match self {
            Message::Default => Message::Text(text()),
            other => other,
        }
    }
}

fn violated(
    kind: ErrorKind,
    source: EidSource,
    location: &Location<'_>,
    message: Message<'_>,
    cause: Option<Cause>,
) -> PreconditionError {
    let eid = match source.resolve(location) {
        Ok(eid) => eid,
        Err(err) => return err,
    };
    let message = message.render();
    debug!(
        eid.id = eid.id(),
        eid.uniq = eid.uniq(),
        eid.reference = eid.reference(),
        kind = %kind,
        "precondition violated"
    );
    let violation = match cause {
        Some(cause) => Violation::with_cause(eid, message, cause),
        None => Violation::new(eid, message),
    };
    EidError::new(kind, violation).into()
}

fn check(
    expression: bool,
    kind: ErrorKind,
    source: EidSource,
    location: &Location<'_>,
    message: Message<'_>,
) -> Result<(), PreconditionError> {
    source.ensure_usable(location)?;
    if expression {
        Ok(())
    } else {
        Err(violated(kind, source, location, message, None))
    }
}

/// Ensures an argument-level condition holds.
///
/// Fails with [`EidError::IllegalArgument`].
#[track_caller]
pub fn check_argument(
    expression: bool,
    eid: impl Into<EidSource>,
) -> Result<(), PreconditionError> {
    check(
        expression,
        ErrorKind::IllegalArgument,
        eid.into(),
        Location::caller(),
        Message::Default,
    )
}

/// [`check_argument`] with a percent-style message.
#[track_caller]
pub fn check_argument_msg(
    expression: bool,
    eid: impl Into<EidSource>,
    format: &str,
    args: &[Arg],
) -> Result<(), PreconditionError> {
    check(
        expression,
        ErrorKind::IllegalArgument,
        eid.into(),
        Location::caller(),
        Message::Formatted(format, args),
    )
}

/// Ensures a state-level condition holds.
///
/// Fails with [`EidError::IllegalState`].
#[track_caller]
pub fn check_state(
    expression: bool,
    eid: impl Into<EidSource>,
) -> Result<(), PreconditionError> {
    check(
        expression,
        ErrorKind::IllegalState,
        eid.into(),
        Location::caller(),
        Message::Default,
    )
}

/// [`check_state`] with a percent-style message.
#[track_caller]
pub fn check_state_msg(
    expression: bool,
    eid: impl Into<EidSource>,
    format: &str,
    args: &[Arg],
) -> Result<(), PreconditionError> {
    check(
        expression,
        ErrorKind::IllegalState,
        eid.into(),
        Location::caller(),
        Message::Formatted(format, args),
    )
}

fn not_null<T>(
    reference: Option<T>,
    source: EidSource,
    location: &Location<'_>,
    message: Message<'_>,
) -> Result<T, PreconditionError> {
    source.ensure_usable(location)?;
    reference.ok_or_else(|| violated(ErrorKind::NullReference, source, location, message, None))
}

/// Ensures a value is present and hands it back.
///
/// Fails with [`EidError::NullReference`].
#[track_caller]
pub fn check_not_null<T>(
    reference: Option<T>,
    eid: impl Into<EidSource>,
) -> Result<T, PreconditionError> {
    not_null(reference, eid.into(), Location::caller(), Message::Default)
}

/// [`check_not_null`] with a percent-style message.
#[track_caller]
pub fn check_not_null_msg<T>(
    reference: Option<T>,
    eid: impl Into<EidSource>,
    format: &str,
    args: &[Arg],
) -> Result<T, PreconditionError> {
    not_null(
        reference,
        eid.into(),
        Location::caller(),
        Message::Formatted(format, args),
    )
}

fn element_index(
    index: i64,
    size: i64,
    source: EidSource,
    location: &Location<'_>,
    message: Message<'_>,
) -> Result<i64, PreconditionError> {
    source.ensure_usable(location)?;
    if size < 0 {
        let message = message.or_text(|| format!("negative size: {size}"));
        return Err(violated(
            ErrorKind::IllegalArgument,
            source,
            location,
            message,
            None,
        ));
    }
    if index < 0 || index >= size {
        let message =
            message.or_text(|| format!("index ({index}) must be less than size ({size})"));
        return Err(violated(
            ErrorKind::IndexOutOfBounds,
            source,
            location,
            message,
            None,
        ));
    }
    Ok(index)
}

/// Ensures `index` is a valid element index for a collection of `size`.
///
/// A negative `size` fails with [`EidError::IllegalArgument`] regardless of
/// `index`; otherwise an index outside `[0, size)` fails with
/// [`EidError::IndexOutOfBounds`]. Returns `index` on success.
#[track_caller]
pub fn check_element_index(
    index: i64,
    size: i64,
    eid: impl Into<EidSource>,
) -> Result<i64, PreconditionError> {
    element_index(index, size, eid.into(), Location::caller(), Message::Default)
}

/// [`check_element_index`] with a percent-style message.
#[track_caller]
pub fn check_element_index_msg(
    index: i64,
    size: i64,
    eid: impl Into<EidSource>,
    format: &str,
    args: &[Arg],
) -> Result<i64, PreconditionError> {
    element_index(
        index,
        size,
        eid.into(),
        Location::caller(),
        Message::Formatted(format, args),
    )
}

/// Runs a fallible operation, wrapping its error in [`EidError::Runtime`].
///
/// The original error is kept as the source of the returned error.
#[track_caller]
pub fn try_to_execute<F, E>(
    operation: F,
    eid: impl Into<EidSource>,
) -> Result<(), PreconditionError>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<Cause>,
{
    try_to_supply(operation, eid)
}

/// Value-returning form of [`try_to_execute`].
#[track_caller]
pub fn try_to_supply<R, F, E>(
    operation: F,
    eid: impl Into<EidSource>,
) -> Result<R, PreconditionError>
where
    F: FnOnce() -> Result<R, E>,
    E: Into<Cause>,
{
    let location = Location::caller();
    let source = eid.into();
    source.ensure_usable(location)?;
    operation().map_err(|err| {
        let cause: Cause = err.into();
        let message = Message::Text(cause.to_string());
        violated(ErrorKind::Runtime, source, location, message, Some(cause))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EidContainer;

    const ID: &str = "20150718:075046";

    #[test]
    fn test_instantiate_always_fails() {
        let err = Preconditions::instantiate().err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        assert_eq!(err.eid().id(), NOT_INSTANTIABLE_EID);
        assert!(!err.eid().reference().is_empty());
        assert!(!err.eid().uniq().is_empty());
        assert!(err
            .to_string()
            .contains("[20150718:083450|This should not be accessed]"));
    }

    #[test]
    fn test_default_message() {
        let err = check_state(false, ID).unwrap_err();
        assert_eq!(err.to_string(), format!("[{ID}|This should not happen]"));
    }

    #[test]
    fn test_eid_attributed_to_guard_caller() {
        let err = check_argument(false, ID).unwrap_err();
        let eid = err.eid().unwrap();
        assert!(eid.reference().contains("preconditions.rs"));
        assert!(eid.reference().contains(&format!(":{}:", line!() - 3)));
    }

    #[test]
    fn test_index_default_messages() {
        let err = check_element_index(7, 3, ID).unwrap_err();
        assert!(err
            .to_string()
            .contains("index (7) must be less than size (3)"));

        let err = check_element_index(0, -2, ID).unwrap_err();
        assert!(err.to_string().contains("negative size: -2"));
    }

    #[test]
    fn test_custom_message_wins_over_index_default() {
        let err = check_element_index_msg(7, 3, ID, "slot %d", &[Arg::from(7i64)]).unwrap_err();
        assert_eq!(err.to_string(), format!("[{ID}|slot 7]"));
    }

    #[test]
    fn test_runtime_message_is_cause() {
        let err = try_to_execute(|| Err::<(), _>("boom".to_string()), ID).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Runtime));
        assert_eq!(err.to_string(), format!("[{ID}|boom]"));
    }
}
