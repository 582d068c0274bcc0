//! The [`Eid`] value object and the string-or-Eid argument accepted by guards.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::Location;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::EidConfig;
use crate::error::{EidError, PreconditionError, Violation};
use crate::format::{render_message, Arg};

/// Eid reported when an Eid is constructed from an empty identifier.
pub const EMPTY_ID_EID: &str = "20150718:075520";

/// An error identifier.
///
/// Holds the caller-chosen `id` plus two derived diagnostics:
///
/// - `ref`: the source location (`file:line:column`) the Eid was built at
/// - `uniq`: a hex fingerprint of `id` and that location
///
/// Equality, ordering and hashing only look at `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Eid {
    id: String,
    #[serde(rename = "ref")]
    reference: String,
    uniq: String,
}

impl Eid {
    /// Creates an Eid attributed to the caller's location.
    ///
    /// Fails with [`EidError::IllegalArgument`] if `id` is empty.
    #[track_caller]
    pub fn new(id: impl Into<String>) -> Result<Self, EidError> {
        Self::at(id, Location::caller())
    }

    /// Creates an Eid attributed to an explicit location.
    pub fn at(id: impl Into<String>, location: &Location<'_>) -> Result<Self, EidError> {
        let id = id.into();
        if !Self::is_valid_id(&id) {
            return Err(Self::empty_id_error(location));
        }
        Ok(Self::derive(id, location))
    }

    fn empty_id_error(location: &Location<'_>) -> EidError {
        EidError::IllegalArgument(Violation::new(
            Self::sentinel(EMPTY_ID_EID, location),
            "Eid identifier must not be empty",
        ))
    }

    /// Builds one of the library's own Eids, whose ids are known to be valid.
    pub(crate) fn sentinel(id: &'static str, location: &Location<'_>) -> Self {
        Self::derive(id.to_string(), location)
    }

    fn derive(id: String, location: &Location<'_>) -> Self {
        let reference = format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
        let uniq = fingerprint(&id, &reference, EidConfig::current().uniq_length);
        Self {
            id,
            reference,
            uniq,
        }
    }

    /// Returns true if `id` is acceptable as an Eid identifier.
    #[must_use]
    pub fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
    }

    /// Returns the identifier exactly as given.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the call-site reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the fingerprint.
    #[must_use]
    pub fn uniq(&self) -> &str {
        &self.uniq
    }

    /// Renders a log line prefixed with this Eid.
    ///
    /// ```ignore
    /// let eid = Eid::new("20150718:075046")?;
    /// eid.make_log_message("user %s not found", &[Arg::from("alice")]);
    /// // "[20150718:075046]<0f3a...> => user alice not found"
    /// ```
    #[must_use]
    pub fn make_log_message(&self, format: &str, args: &[Arg]) -> String {
        format!(
            "{}{}{}",
            self,
            EidConfig::current().log_message_separator,
            render_message(format, args)
        )
    }
}

fn fingerprint(id: &str, reference: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    hasher.update([0u8]);
    hasher.update(reference.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(length);
    digest
}

impl fmt::Display for Eid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]<{}>", self.id, self.uniq)
    }
}

impl PartialEq for Eid {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Eid {}

impl PartialOrd for Eid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Eid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Eid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Either a raw identifier or an already-built [`Eid`].
///
/// Guards take `impl Into<EidSource>` so callers may pass `"20150718:075046"`,
/// an `Eid`, or an `Option<Eid>`. `None` is the missing Eid and is rejected
/// before the check runs.
#[derive(Debug, Clone)]
pub enum EidSource {
    Id(String),
    Eid(Eid),
    Missing,
}

impl EidSource {
    /// Fails fast on a missing Eid or an empty raw identifier.
    pub(crate) fn ensure_usable(&self, location: &Location<'_>) -> Result<(), PreconditionError> {
        match self {
            EidSource::Missing => Err(PreconditionError::MissingEid),
            EidSource::Id(id) if !Eid::is_valid_id(id) => Err(Eid::empty_id_error(location).into()),
            EidSource::Id(_) | EidSource::Eid(_) => Ok(()),
        }
    }

    /// Resolves to an Eid, building one at `location` for raw identifiers.
    pub fn resolve(self, location: &Location<'_>) -> Result<Eid, PreconditionError> {
        match self {
            EidSource::Id(id) => Ok(Eid::at(id, location)?),
            EidSource::Eid(eid) => Ok(eid),
            EidSource::Missing => Err(PreconditionError::MissingEid),
        }
    }
}

impl From<&str> for EidSource {
    fn from(id: &str) -> Self {
        EidSource::Id(id.to_string())
    }
}

impl From<String> for EidSource {
    fn from(id: String) -> Self {
        EidSource::Id(id)
    }
}

impl From<&String> for EidSource {
    fn from(id: &String) -> Self {
        EidSource::Id(id.clone())
    }
}

impl From<Eid> for EidSource {
    fn from(eid: Eid) -> Self {
        EidSource::Eid(eid)
    }
}

impl From<&Eid> for EidSource {
    fn from(eid: &Eid) -> Self {
        EidSource::Eid(eid.clone())
    }
}

impl From<Option<Eid>> for EidSource {
    fn from(eid: Option<Eid>) -> Self {
        eid.map_or(EidSource::Missing, EidSource::Eid)
    }
}

impl From<Option<&Eid>> for EidSource {
    fn from(eid: Option<&Eid>) -> Self {
        eid.map_or(EidSource::Missing, |eid| EidSource::Eid(eid.clone()))
    }
}
