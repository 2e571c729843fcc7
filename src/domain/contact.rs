use serde::Serialize;

use crate::domain::types::{ContactId, OptionalField, SortField, SortOrder};

/// Validated payload for creating a contact.
///
/// Optional text fields that arrived absent or as an empty string are
/// collapsed to `None`: a new contact has no prior value to preserve, so
/// the two states are equivalent here.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    /// Ordered tag labels; empty when the request carried none.
    pub tags: Vec<String>,
}

/// Validated field changes for a partial update.
///
/// `name` and `phone` have no meaningful empty state (an empty name is
/// invalid), so plain `Option` suffices; the remaining text fields keep the
/// full [`OptionalField`] tri-state so the downstream handler can tell
/// "leave unchanged" apart from "clear the value".
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: OptionalField<String>,
    pub phone: Option<String>,
    pub address: OptionalField<String>,
    pub company: OptionalField<String>,
    pub notes: OptionalField<String>,
    pub tags: Option<Vec<String>>,
}

impl ContactPatch {
    /// Returns `true` when the request supplied no fields at all. Such an
    /// update is syntactically valid and a no-op downstream.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email == OptionalField::Absent
            && self.phone.is_none()
            && self.address == OptionalField::Absent
            && self.company == OptionalField::Absent
            && self.notes == OptionalField::Absent
            && self.tags.is_none()
    }
}

/// Validated update request: the target contact plus the field changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactUpdate {
    pub id: ContactId,
    pub patch: ContactPatch,
}

/// Validated list-query parameters.
///
/// `page` and `limit` stay raw strings: numeric coercion and bounds are the
/// responsibility of the pagination layer behind the route handler.
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct ContactListQuery {
    /// Optional free-form search string applied to the contact list.
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
    /// Optional free-text tag filter.
    pub tags: Option<String>,
}
