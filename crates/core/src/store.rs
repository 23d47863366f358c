//! Document-store seam.
//!
//! [`MedicineStore`] is the only way core code reaches medicine documents. Its query shape
//! mirrors what a document database offers for this collection: an optional
//! case-insensitive anchored regex on `name` plus exact-equality conditions on the
//! composition fields, and an optional result limit.
//!
//! [`JsonCollection`] is the shipped backend: a JSON array export of the collection,
//! loaded once at startup and held read-only in memory for the life of the process.

use crate::document::StoredMedicine;
use crate::error::{MedicineError, MedicineResult};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::Path;

/// Case-insensitive name condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameMatch {
    /// `name` starts with the fragment.
    Prefix(String),
    /// `name` equals the value, anchored at both ends.
    Exact(String),
}

impl NameMatch {
    /// Compiles the condition into a case-insensitive regex.
    ///
    /// The user-supplied text is escaped, so characters such as `(`, `+` or `.` match
    /// literally instead of being interpreted as pattern syntax.
    pub fn to_regex(&self) -> MedicineResult<Regex> {
        let pattern = match self {
            NameMatch::Prefix(fragment) => format!("^{}", regex::escape(fragment)),
            NameMatch::Exact(name) => format!("^{}$", regex::escape(name)),
        };
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| MedicineError::Store(format!("invalid name pattern: {e}")))
    }
}

/// A conjunction of conditions. Unset conditions match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicineFilter {
    pub name: Option<NameMatch>,
    pub short_composition1: Option<String>,
    pub short_composition2: Option<String>,
}

/// Read-only access to the medicine collection.
///
/// Implementations must return documents in store order and must not apply any
/// normalisation to composition values.
pub trait MedicineStore: Send + Sync {
    /// Returns documents matching every condition of `filter`, at most `limit` of them.
    ///
    /// # Errors
    /// Returns [`MedicineError::Store`] if the query cannot be executed.
    fn find(
        &self,
        filter: &MedicineFilter,
        limit: Option<usize>,
    ) -> MedicineResult<Vec<StoredMedicine>>;

    /// Number of documents in the collection.
    fn count(&self) -> MedicineResult<u64>;
}

/// In-memory collection loaded from a JSON array export.
#[derive(Clone, Debug, Default)]
pub struct JsonCollection {
    documents: Vec<StoredMedicine>,
}

impl JsonCollection {
    /// Wraps already-parsed documents, keeping their order.
    pub fn new(documents: Vec<StoredMedicine>) -> Self {
        Self { documents }
    }

    /// Parses a JSON array of medicine documents.
    ///
    /// Entries that are not documents at all (numbers, strings, nested arrays) are skipped
    /// with a warning; field-level oddities are absorbed by [`StoredMedicine`] itself.
    ///
    /// # Errors
    /// Returns [`MedicineError::Deserialization`] if the text is not a JSON array.
    pub fn from_json_str(json: &str) -> MedicineResult<Self> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(MedicineError::Deserialization)?;

        let documents = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match StoredMedicine::deserialize(entry) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!("Skipping medicine entry {}: {}", index, e);
                    None
                }
            })
            .collect();
        Ok(Self::new(documents))
    }

    /// Loads the collection from a JSON export on disk.
    ///
    /// # Errors
    /// Returns [`MedicineError::DataLoad`] if the file cannot be read, or
    /// [`MedicineError::Deserialization`] if it does not parse.
    pub fn from_path(path: &Path) -> MedicineResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| MedicineError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_json_str(&contents)?;

        let unnamed = collection
            .documents
            .iter()
            .filter(|d| d.name.trim().is_empty())
            .count();
        if unnamed > 0 {
            tracing::warn!(
                "{} medicine documents in {} have no name and can only match composition queries",
                unnamed,
                path.display()
            );
        }

        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl MedicineStore for JsonCollection {
    fn find(
        &self,
        filter: &MedicineFilter,
        limit: Option<usize>,
    ) -> MedicineResult<Vec<StoredMedicine>> {
        let name_regex = filter.name.as_ref().map(NameMatch::to_regex).transpose()?;

        let matches = self.documents.iter().filter(|doc| {
            name_regex.as_ref().map_or(true, |re| re.is_match(&doc.name))
                && equals(&filter.short_composition1, &doc.short_composition1)
                && equals(&filter.short_composition2, &doc.short_composition2)
        });

        Ok(match limit {
            Some(limit) => matches.take(limit).cloned().collect(),
            None => matches.cloned().collect(),
        })
    }

    fn count(&self) -> MedicineResult<u64> {
        Ok(self.documents.len() as u64)
    }
}

fn equals(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        Some(value) => actual.as_deref() == Some(value.as_str()),
        None => true,
    }
}
