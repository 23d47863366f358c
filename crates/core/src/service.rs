//! Medicine lookup operations.
//!
//! [`MedicineService`] validates input, builds the filter for each lookup and projects
//! stored documents into wire types. It holds nothing but the process-lifetime store
//! handle.

use crate::constants::SUGGESTION_LIMIT;
use crate::error::{MedicineError, MedicineResult};
use crate::matching::{composition_filter, detail_filter, suggestion_filter};
use crate::store::MedicineStore;
use api_shared::{MedicineRes, SimilarMedicineRes, SuggestionRes};
use medquery_types::NonBlankText;
use std::sync::Arc;

/// Pure lookup operations over one medicine collection - no API concerns.
#[derive(Clone)]
pub struct MedicineService {
    store: Arc<dyn MedicineStore>,
}

impl std::fmt::Debug for MedicineService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedicineService").finish_non_exhaustive()
    }
}

impl MedicineService {
    /// Creates a service over an already-connected store.
    ///
    /// # Arguments
    ///
    /// * `store` - Store handle shared for the life of the process
    pub fn new(store: Arc<dyn MedicineStore>) -> Self {
        Self { store }
    }

    /// Autocomplete names starting with `fragment`.
    ///
    /// A missing or blank fragment returns an empty list without querying the store.
    ///
    /// # Returns
    ///
    /// At most [`SUGGESTION_LIMIT`] names, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`MedicineError::Store`] if the store query fails.
    pub fn suggestions(&self, fragment: Option<&str>) -> MedicineResult<Vec<SuggestionRes>> {
        let Ok(fragment) = NonBlankText::from_optional(fragment) else {
            return Ok(Vec::new());
        };

        let found = self
            .store
            .find(&suggestion_filter(&fragment), Some(SUGGESTION_LIMIT))?;
        Ok(found.iter().map(|doc| doc.to_suggestion()).collect())
    }

    /// Full details of the medicine whose name equals `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if `name` is missing or blank
    /// - [`MedicineError::NotFound`] if no document has that name
    /// - [`MedicineError::Store`] if the store query fails
    pub fn medicine(&self, name: Option<&str>) -> MedicineResult<MedicineRes> {
        let name = NonBlankText::from_optional(name)
            .map_err(|_| MedicineError::InvalidInput("Medicine name required".into()))?;

        let found = self.store.find(&detail_filter(&name), Some(1))?;
        found
            .first()
            .map(|doc| doc.to_detail())
            .ok_or_else(|| MedicineError::NotFound(name.into_inner()))
    }

    /// Every medicine whose composition fields equal `comp1` (and `comp2`, when given).
    ///
    /// The queried medicine itself is part of the result when it matches; callers
    /// exclude it by name.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if `comp1` is missing or blank
    /// - [`MedicineError::Store`] if the store query fails
    pub fn similar(
        &self,
        comp1: Option<&str>,
        comp2: Option<&str>,
    ) -> MedicineResult<Vec<SimilarMedicineRes>> {
        let comp1 = NonBlankText::from_optional(comp1)
            .map_err(|_| MedicineError::InvalidInput("Composition required".into()))?;

        let found = self.store.find(&composition_filter(&comp1, comp2), None)?;
        tracing::debug!("{} medicines share composition \"{}\"", found.len(), comp1);
        Ok(found.iter().map(|doc| doc.to_similar()).collect())
    }

    /// Number of documents visible through the store.
    pub fn count(&self) -> MedicineResult<u64> {
        self.store.count()
    }
}
