//! # API Shared
//!
//! Shared wire definitions for the MedQuery lookup API.
//!
//! Contains:
//! - JSON request/response types (`wire` module), each with an OpenAPI schema
//! - Shared services like `HealthService`
//!
//! Used by `medquery-core` to shape query results, by `api-rest` to serve them and by
//! `medquery-client` to decode them.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
