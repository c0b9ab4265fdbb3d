//! FAIR Data Point metadata translators.
//!
//! One operation per resource kind — repository, catalog, dataset,
//! distribution — each mapping tranSMART study metadata onto a fresh RDF
//! graph. See <https://www.dtls.nl/fair-data/> for the pattern.

mod translator;

pub use translator::MetadataService;
