//! The submit flow: details first, then medicines sharing the composition.
//!
//! Failures never propagate past this module. A failed or empty detail lookup yields an
//! empty outcome, and a failed substitute lookup leaves the substitute list empty.

use crate::error::{ClientError, ClientResult};
use crate::lookup::MedicineLookup;
use api_shared::{MedicineRes, SimilarMedicineRes};
use futures_util::future::join_all;
use medquery_types::is_blank;

/// What the result view renders after a submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub medicine: Option<MedicineRes>,
    /// Medicines with the same composition, without the searched medicine itself.
    pub substitutes: Vec<SimilarMedicineRes>,
}

/// Case-insensitive name equality, Unicode-aware.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Drops every entry whose name equals `name`, ignoring case.
pub fn exclude_by_name(items: Vec<SimilarMedicineRes>, name: &str) -> Vec<SimilarMedicineRes> {
    items
        .into_iter()
        .filter(|item| !same_name(&item.name, name))
        .collect()
}

/// Looks up `name`, then the medicines sharing its composition.
///
/// # Errors
///
/// Returns [`ClientError::InvalidInput`] for a blank name; nothing is requested in that
/// case. Every other failure degrades to an emptier [`SearchOutcome`].
pub async fn search<L: MedicineLookup>(lookup: &L, name: &str) -> ClientResult<SearchOutcome> {
    if is_blank(Some(name)) {
        return Err(ClientError::InvalidInput("Medicine name required".into()));
    }

    let medicine = match lookup.medicine(name).await {
        Ok(Some(medicine)) => medicine,
        Ok(None) => {
            tracing::info!("No medicine named {:?}", name);
            return Ok(SearchOutcome::default());
        }
        Err(e) => {
            tracing::warn!("Detail lookup for {:?} failed: {}", name, e);
            return Ok(SearchOutcome::default());
        }
    };

    let substitutes = match medicine.short_composition1.as_deref() {
        Some(comp1) if !comp1.trim().is_empty() => {
            match lookup
                .similar(comp1, medicine.short_composition2.as_deref())
                .await
            {
                Ok(found) => exclude_by_name(found, &medicine.name),
                Err(e) => {
                    tracing::warn!("Substitute lookup for {:?} failed: {}", medicine.name, e);
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    };

    Ok(SearchOutcome {
        medicine: Some(medicine),
        substitutes,
    })
}

/// Details of each substitute the medicine names explicitly, one request per name.
///
/// This is a convenience view over the detail endpoint. Names the service does not know,
/// and names whose lookup fails, are skipped. Order follows the medicine's list.
pub async fn named_substitutes<L: MedicineLookup>(
    lookup: &L,
    medicine: &MedicineRes,
) -> Vec<MedicineRes> {
    let lookups = medicine
        .substitutes
        .iter()
        .filter(|name| !same_name(name, &medicine.name))
        .map(|name| async move { (name, lookup.medicine(name).await) });

    join_all(lookups)
        .await
        .into_iter()
        .filter_map(|(name, result)| match result {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("Named substitute {:?} could not be loaded: {}", name, e);
                None
            }
        })
        .collect()
}
