//! JSON shapes exchanged between the lookup service and its clients.
//!
//! Every price on the wire is a plain `price` field. The store's currency-qualified column
//! name never appears in these types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One autocomplete entry. Only the name is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuggestionRes {
    pub name: String,
}

/// Full medicine details returned by `GET /medicine`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicineRes {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    /// Price in rupees, renamed from the store's currency-qualified field.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_composition1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_composition2: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub medicine_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_size_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub uses: Vec<String>,
    /// Named substitutes as recorded on the document. Not verified to exist.
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit_forming: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapeutic_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_class: Option<String>,
}

/// A medicine sharing a composition, as returned by `GET /similar`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimilarMedicineRes {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_composition1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_composition2: Option<String>,
}

/// Error body shared by every failing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Liveness report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    /// Number of medicine documents visible through the store handle.
    pub medicines: u64,
}

/// Query string of `GET /suggestions`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionsQuery {
    /// Name fragment; blank or missing yields an empty list.
    pub q: Option<String>,
}

/// Query string of `GET /medicine`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MedicineQuery {
    /// Exact medicine name, compared case-insensitively.
    pub name: Option<String>,
}

/// Query string of `GET /similar`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SimilarQuery {
    /// First composition string, matched byte-for-byte. Required.
    pub comp1: Option<String>,
    /// Second composition string. Ignored when blank.
    pub comp2: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medicine_res_uses_plain_price_and_type_keys() {
        let res = MedicineRes {
            name: "Augmentin 625 Duo Tablet".into(),
            price: Some(223.42),
            medicine_type: Some("allopathy".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(json["price"], 223.42);
        assert_eq!(json["type"], "allopathy");
        assert!(json.get("price(₹)").is_none());
        assert!(json.get("manufacturer_name").is_none());
    }

    #[test]
    fn similar_res_keeps_null_price() {
        let res = SimilarMedicineRes {
            name: "Moxikind-CV 625 Tablet".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&res).unwrap();
        assert!(json["price"].is_null());
    }
}
