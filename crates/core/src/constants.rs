//! Constants used throughout the MedQuery core crate.
//!
//! Field names of the stored collection and the default runtime settings. The rename to the
//! wire shape is defined in one place.

/// Maximum number of autocomplete suggestions returned for one fragment.
pub const SUGGESTION_LIMIT: usize = 6;

/// Currency-qualified price column as it exists in the store.
pub const STORED_PRICE_FIELD: &str = "price(₹)";

/// Number of flat `useN` / `substituteN` columns a stored document may carry.
pub const FLAT_FIELD_SLOTS: usize = 5;

/// Default path of the JSON export loaded at startup.
pub const DEFAULT_DATA_PATH: &str = "data/medicines.json";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;
