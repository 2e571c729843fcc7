//! Request validation for a contact-management CRUD API.
//!
//! Five operations cover the contact routes: create, partial update,
//! get-by-id, delete, and list. Each takes the raw request sections
//! (`body`, `params`, `query`) deserialized into a form from
//! [`forms::contact`] and converts it via `TryFrom` into a typed domain
//! value, or into a [`validation::ValidationFailure`] listing every
//! violated constraint of the request.
//!
//! The crate is a pure library: no I/O, no logging, no state. The HTTP
//! layer in front of it extracts the sections, invokes the matching
//! conversion, and serializes a failure into the 4xx response payload.

pub mod domain;
pub mod forms;
pub mod validation;
