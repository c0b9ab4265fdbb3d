//! RDF graph model and Turtle serialization.
//!
//! Statements are plain `(subject, predicate, object)` triples over [`Iri`]
//! and [`Literal`] terms, collected into a per-request [`Graph`] that also
//! carries the prefix bindings used when writing Turtle.

mod graph;
mod term;

pub mod turtle;
pub mod vocab;

pub use graph::{Graph, Statement};
pub use term::{Iri, Literal, Term};
