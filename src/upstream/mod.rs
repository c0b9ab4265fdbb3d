//! Client for the tranSMART REST API.
//!
//! [`TransmartClient`] owns the HTTP connection and a lazily acquired bearer
//! token; [`StudyProvider`] is the seam the translators depend on, so tests
//! can substitute canned study payloads.

mod client;
mod fields;

pub use client::{StudyProvider, TransmartClient};
pub use fields::{array_field, object_field, required, required_str, str_field};
