//! # MedQuery Core
//!
//! Core lookup logic for the MedQuery medicine service.
//!
//! This crate contains pure data operations over one read-only medicine collection:
//! - Canonical reading of stored medicine documents ([`document`])
//! - The document-store seam and its in-memory JSON backend ([`store`])
//! - Filters for suggestion, detail and composition lookups ([`matching`])
//! - The [`MedicineService`] that ties them together
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod matching;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use document::StoredMedicine;
pub use error::{MedicineError, MedicineResult};
pub use service::MedicineService;
pub use store::{JsonCollection, MedicineFilter, MedicineStore, NameMatch};
