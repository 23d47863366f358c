//! # MedQuery Client
//!
//! Client side of the medicine lookup.
//!
//! Contains:
//! - [`LookupClient`], a typed HTTP client for the lookup service
//! - [`SuggestionFeed`], cancellable latest-keystroke-wins autocomplete
//! - [`search`], the submit flow (details, then substitutes minus the medicine itself)
//! - [`Screen`], the lookup screen's state machine
//! - [`metrics`], body-mass index and basal metabolic rate formulas
//!
//! Failures are logged and degrade to empty lists; they are never shown to the user.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod metrics;
pub mod screen;
pub mod search;
pub mod suggest;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use lookup::{LookupClient, MedicineLookup};
pub use screen::{Phase, Screen};
pub use search::{exclude_by_name, named_substitutes, search, SearchOutcome};
pub use suggest::{SuggestionFeed, Suggestions};

pub use api_shared::{MedicineRes, SimilarMedicineRes};
