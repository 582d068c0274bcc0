//! # eid
//!
//! Error IDs and Eid-tagged precondition guards.
//!
//! ## Design Principles
//!
//! - Every check in a codebase carries its own identifier, so a failure in a
//!   log line leads straight back to one call site
//! - Guards return errors; they never panic and never swallow a violation
//! - A bad diagnostic message never hides the violation it describes
//!
//! ## Eid Format
//!
//! Identifiers are free-form, non-empty strings. The convention is a
//! timestamp of when the check was written, which keeps them unique and
//! sortable:
//!
//! - `20150718:075046`
//!
//! Each [`Eid`] also derives:
//! - `ref`: the `file:line:column` it was built at
//! - `uniq`: a SHA-256 based hex fingerprint of the id and `ref`
//!
//! Failed checks render as `[<id>|<message>]`:
//!
//! ```text
//! [20150718:075046|PI value is 3.14]
//! ```

mod config;
mod error;
mod format;
mod identifier;
mod macros;
pub mod preconditions;

pub use config::{ConfigError, EidConfig, MAX_UNIQ_LENGTH, MIN_UNIQ_LENGTH};
pub use error::{Cause, EidContainer, EidError, ErrorKind, PreconditionError, Violation};
pub use format::{format_message, render_message, Arg, FormatError, MAX_FIELD_WIDTH};
pub use identifier::{Eid, EidSource, EMPTY_ID_EID};
pub use preconditions::{
    check_argument, check_argument_msg, check_element_index, check_element_index_msg,
    check_not_null, check_not_null_msg, check_state, check_state_msg, try_to_execute,
    try_to_supply, Preconditions, NOT_INSTANTIABLE_EID,
};
