//! Integration tests for the FAIR Data Point HTTP facade.
//!
//! These tests drive the full router with a stubbed study provider, so no
//! tranSMART instance is required.

#[path = "integration/test_routes.rs"]
mod test_routes;
