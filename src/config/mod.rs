//! Configuration for the FAIR Data Point server.

mod settings;

pub use settings::{Config, ServerConfig, UpstreamConfig};
