//! Raw request shapes for the contacts API and their conversion into
//! validated domain values.
//!
//! Each operation form mirrors the sections of the incoming request
//! (`body`, `params`, `query`) and converts via `TryFrom` into the domain
//! value the route handler consumes. Conversions check every field before
//! returning, so a [`ValidationFailure`] lists all violated constraints of
//! a request in one pass.
//!
//! The literal messages below are user-facing text displayed by existing
//! clients and must stay byte-for-byte stable.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::domain::contact::{ContactListQuery, ContactPatch, ContactUpdate, NewContact};
use crate::domain::types::{ContactId, OptionalField, SortField, SortOrder};
use crate::validation::{ValidationFailure, Violations};

const NAME_MAX: usize = 50;
const EMAIL_MAX: usize = 100;
const PHONE_LEN: usize = 11;
const ADDRESS_MAX: usize = 200;
const COMPANY_MAX: usize = 100;
const NOTES_MAX: usize = 500;

const MSG_REQUIRED: &str = "Required";
const MSG_NAME_EMPTY: &str = "姓名不能为空";
const MSG_NAME_TOO_LONG: &str = "姓名不能超过50个字符";
const MSG_EMAIL_FORMAT: &str = "邮箱格式不正确";
const MSG_EMAIL_TOO_LONG: &str = "邮箱不能超过100个字符";
const MSG_PHONE_FORMAT: &str = "手机号格式不正确";
const MSG_PHONE_TOO_LONG: &str = "手机号不能超过11个字符";
const MSG_ADDRESS_TOO_LONG: &str = "地址不能超过200个字符";
const MSG_COMPANY_TOO_LONG: &str = "公司不能超过100个字符";
const MSG_NOTES_TOO_LONG: &str = "备注不能超过500个字符";
const MSG_ID_FORMAT: &str = "ID格式不正确";

/// Body section shared by the create and update operations.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Path parameters for operations addressing a single contact.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactIdParams {
    pub id: Option<String>,
}

/// Query section of the list operation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactListParams {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub tags: Option<String>,
}

/// Raw create-contact request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CreateContactForm {
    #[serde(default)]
    pub body: ContactBody,
}

/// Raw partial-update request. An empty body is syntactically valid.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpdateContactForm {
    #[serde(default)]
    pub params: ContactIdParams,
    #[serde(default)]
    pub body: ContactBody,
}

/// Raw request addressing a single contact by id. Both the get-by-id and
/// delete routes consume this shape.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactIdForm {
    #[serde(default)]
    pub params: ContactIdParams,
}

/// Raw list-contacts request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ListContactsForm {
    #[serde(default)]
    pub query: ContactListParams,
}

fn check_name(value: &str, errors: &mut Violations) {
    if value.is_empty() {
        errors.push("name", MSG_NAME_EMPTY);
    }
    if value.chars().count() > NAME_MAX {
        errors.push("name", MSG_NAME_TOO_LONG);
    }
}

fn check_email(value: &str, errors: &mut Violations) {
    if !value.validate_email() {
        errors.push("email", MSG_EMAIL_FORMAT);
    }
    if value.chars().count() > EMAIL_MAX {
        errors.push("email", MSG_EMAIL_TOO_LONG);
    }
}

fn check_phone(value: &str, errors: &mut Violations) {
    // Exactly 11 ASCII digits, no separators or country code.
    let well_formed = value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        errors.push("phone", MSG_PHONE_FORMAT);
    }
    if value.chars().count() > PHONE_LEN {
        errors.push("phone", MSG_PHONE_TOO_LONG);
    }
}

fn check_max_len(field: &str, value: &str, max: usize, message: &str, errors: &mut Violations) {
    if value.chars().count() > max {
        errors.push(field, message);
    }
}

/// Runs `check` when an optional-or-empty field carries a value. Absent and
/// empty are both accepted as "no value supplied" without validation.
fn checked_optional(
    raw: Option<&str>,
    errors: &mut Violations,
    check: impl FnOnce(&str, &mut Violations),
) -> OptionalField<String> {
    OptionalField::from_raw(raw).map(|value| {
        check(value, errors);
        value.to_string()
    })
}

fn checked_id(params: &ContactIdParams, errors: &mut Violations) -> Option<ContactId> {
    match params.id.as_deref() {
        None => {
            errors.push("params.id", MSG_REQUIRED);
            None
        }
        Some(raw) => match raw.parse::<ContactId>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("params.id", MSG_ID_FORMAT);
                None
            }
        },
    }
}

impl TryFrom<CreateContactForm> for NewContact {
    type Error = ValidationFailure;

    fn try_from(form: CreateContactForm) -> Result<Self, Self::Error> {
        let body = form.body;
        let mut errors = Violations::new();

        let name = match body.name.as_deref() {
            Some(value) => {
                check_name(value, &mut errors);
                Some(value.to_string())
            }
            None => {
                errors.push("name", MSG_REQUIRED);
                None
            }
        };

        let phone = match body.phone.as_deref() {
            Some(value) => {
                check_phone(value, &mut errors);
                Some(value.to_string())
            }
            None => {
                errors.push("phone", MSG_REQUIRED);
                None
            }
        };

        let email = checked_optional(body.email.as_deref(), &mut errors, check_email);
        let address = checked_optional(body.address.as_deref(), &mut errors, |value, errors| {
            check_max_len("address", value, ADDRESS_MAX, MSG_ADDRESS_TOO_LONG, errors);
        });
        let company = checked_optional(body.company.as_deref(), &mut errors, |value, errors| {
            check_max_len("company", value, COMPANY_MAX, MSG_COMPANY_TOO_LONG, errors);
        });
        let notes = checked_optional(body.notes.as_deref(), &mut errors, |value, errors| {
            check_max_len("notes", value, NOTES_MAX, MSG_NOTES_TOO_LONG, errors);
        });

        match (name, phone) {
            (Some(name), Some(phone)) if errors.is_empty() => Ok(NewContact {
                name,
                email: email.into_option(),
                phone,
                address: address.into_option(),
                company: company.into_option(),
                notes: notes.into_option(),
                tags: body.tags.unwrap_or_default(),
            }),
            _ => Err(errors.into_failure()),
        }
    }
}

impl TryFrom<UpdateContactForm> for ContactUpdate {
    type Error = ValidationFailure;

    fn try_from(form: UpdateContactForm) -> Result<Self, Self::Error> {
        let mut errors = Violations::new();

        let id = checked_id(&form.params, &mut errors);

        let body = form.body;
        // Same field rules as create; only the required-presence checks are
        // relaxed, so anything that passes create also passes here.
        let name = body.name.as_deref().map(|value| {
            check_name(value, &mut errors);
            value.to_string()
        });
        let phone = body.phone.as_deref().map(|value| {
            check_phone(value, &mut errors);
            value.to_string()
        });
        let email = checked_optional(body.email.as_deref(), &mut errors, check_email);
        let address = checked_optional(body.address.as_deref(), &mut errors, |value, errors| {
            check_max_len("address", value, ADDRESS_MAX, MSG_ADDRESS_TOO_LONG, errors);
        });
        let company = checked_optional(body.company.as_deref(), &mut errors, |value, errors| {
            check_max_len("company", value, COMPANY_MAX, MSG_COMPANY_TOO_LONG, errors);
        });
        let notes = checked_optional(body.notes.as_deref(), &mut errors, |value, errors| {
            check_max_len("notes", value, NOTES_MAX, MSG_NOTES_TOO_LONG, errors);
        });

        match id {
            Some(id) if errors.is_empty() => Ok(ContactUpdate {
                id,
                patch: ContactPatch {
                    name,
                    email,
                    phone,
                    address,
                    company,
                    notes,
                    tags: body.tags,
                },
            }),
            _ => Err(errors.into_failure()),
        }
    }
}

impl TryFrom<ContactIdForm> for ContactId {
    type Error = ValidationFailure;

    fn try_from(form: ContactIdForm) -> Result<Self, Self::Error> {
        let mut errors = Violations::new();
        match checked_id(&form.params, &mut errors) {
            Some(id) => Ok(id),
            None => Err(errors.into_failure()),
        }
    }
}

impl TryFrom<ListContactsForm> for ContactListQuery {
    type Error = ValidationFailure;

    fn try_from(form: ListContactsForm) -> Result<Self, Self::Error> {
        let query = form.query;
        let mut errors = Violations::new();

        let sort_by = match query.sort_by.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<SortField>() {
                Ok(field) => Some(field),
                Err(err) => {
                    errors.push("query.sortBy", err.to_string());
                    None
                }
            },
        };

        let order = match query.order.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<SortOrder>() {
                Ok(order) => Some(order),
                Err(err) => {
                    errors.push("query.order", err.to_string());
                    None
                }
            },
        };

        if errors.is_empty() {
            Ok(ContactListQuery {
                search: query.search,
                page: query.page,
                limit: query.limit,
                sort_by,
                order,
                tags: query.tags,
            })
        } else {
            Err(errors.into_failure())
        }
    }
}
