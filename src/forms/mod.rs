//! Form definitions backing the contacts API routes.

pub mod contact;
