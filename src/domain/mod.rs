//! Domain values produced by the contact request validators.

pub mod contact;
pub mod types;
