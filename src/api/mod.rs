//! HTTP facade for the FAIR Data Point.
//!
//! Routes the four metadata endpoints to their translators and writes the
//! serialized graphs as `text/turtle` responses.

mod handlers;
mod rest;

pub use handlers::*;
pub use rest::*;
