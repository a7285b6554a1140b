//! Networking: the one outbound HTTP call this site makes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` owns the contact-form submission: payload schema, field
//! validation, the POST itself, and the mapping from every failure mode to
//! user-facing text. The backend lives outside this repository.

pub mod contact;
