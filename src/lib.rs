//! fairpoint: FAIR Data Point metadata server for tranSMART.
//!
//! Exposes a research-data repository and its studies as linked-data
//! descriptions following the FAIR Data Point pattern (repository →
//! catalog → dataset → distribution). Each request fetches study metadata
//! from the tranSMART REST API, maps it onto DCT/DCAT/R3D/FDP statements,
//! and serializes the resulting graph as Turtle.

pub mod api;
pub mod config;
pub mod error;
pub mod metadata;
pub mod rdf;
pub mod upstream;

pub use api::{create_router, run_server, ApiState};
pub use config::Config;
pub use error::{FdpError, Result};
pub use metadata::MetadataService;
pub use rdf::{Graph, Iri, Literal, Statement, Term};
pub use upstream::{StudyProvider, TransmartClient};
