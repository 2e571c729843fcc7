//! Strongly-typed value objects used by validated contact requests.
//!
//! These wrappers enforce basic invariants (well-formed UUID identifiers,
//! closed sets of sort options) so that once a value reaches the domain
//! layer it can be treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Public contact identifier carried in request path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Returns the backing [`Uuid`].
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl From<Uuid> for ContactId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ContactId> for Uuid {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// Sortable contact fields accepted by the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Wire-format spelling of the field, as sent by clients.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            _ => Err(TypeConstraintError::InvalidValue(
                "expected one of 'name', 'createdAt', 'updatedAt'".to_string(),
            )),
        }
    }
}

/// Sort direction accepted by the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(TypeConstraintError::InvalidValue(
                "expected one of 'asc', 'desc'".to_string(),
            )),
        }
    }
}

/// Tri-state for fields that may be absent, present-but-empty, or carry a
/// validated value.
///
/// Partial updates need all three states: an absent field is left unchanged
/// by the downstream handler, while an empty string is a deliberate "no
/// value" supplied by the client. Collapsing both into `Option` would lose
/// that distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionalField<T> {
    /// The field was not present in the request.
    #[default]
    Absent,
    /// The field was present with an empty string value.
    Empty,
    /// The field was present and passed validation.
    Valid(T),
}

impl<'a> OptionalField<&'a str> {
    /// Classifies a raw optional text field.
    pub fn from_raw(value: Option<&'a str>) -> Self {
        match value {
            None => Self::Absent,
            Some("") => Self::Empty,
            Some(s) => Self::Valid(s),
        }
    }
}

impl<T> OptionalField<T> {
    /// Collapses the tri-state into an `Option`, treating both `Absent` and
    /// `Empty` as "no value supplied".
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent | Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionalField<U> {
        match self {
            Self::Absent => OptionalField::Absent,
            Self::Empty => OptionalField::Empty,
            Self::Valid(value) => OptionalField::Valid(f(value)),
        }
    }
}
