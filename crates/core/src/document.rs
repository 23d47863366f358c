//! Stored medicine documents.
//!
//! The collection's schema is given, not designed here. Column names carry spaces, a
//! currency symbol and two competing substitute layouts. This module reads that shape once
//! and exposes a single canonical [`StoredMedicine`]:
//!
//! - `price(₹)` becomes `price`, parsed from a number or a numeric string
//! - a missing or null `name` reads as an empty name
//! - `use0..use4` become an ordered `uses` list
//! - `substitute0..substitute4` and/or a `substitutes` array become one ordered
//!   `substitutes` list (flat columns first)
//! - composition strings are kept verbatim, since they are matched byte-for-byte
//!
//! Projections into the wire types live here too, so the rename happens in exactly one
//! place.

use crate::constants::FLAT_FIELD_SLOTS;
use api_shared::{MedicineRes, SimilarMedicineRes, SuggestionRes};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One medicine document in canonical form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawMedicine")]
pub struct StoredMedicine {
    pub name: String,
    pub manufacturer_name: Option<String>,
    pub price: Option<f64>,
    pub medicine_type: Option<String>,
    pub pack_size_label: Option<String>,
    pub package: Option<String>,
    pub short_composition1: Option<String>,
    pub short_composition2: Option<String>,
    pub uses: Vec<String>,
    pub substitutes: Vec<String>,
    pub side_effects: Option<String>,
    pub habit_forming: Option<String>,
    pub therapeutic_class: Option<String>,
    pub chemical_class: Option<String>,
    pub action_class: Option<String>,
}

/// The document exactly as the collection stores it.
///
/// Fields are read leniently. Scalars in text columns are kept in string form; nulls,
/// objects and arrays read as absent.
#[derive(Deserialize)]
struct RawMedicine {
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    manufacturer_name: Option<String>,
    #[serde(rename = "price(₹)", default, deserialize_with = "lenient_price")]
    price: Option<f64>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    medicine_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pack_size_label: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    package: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    short_composition1: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    short_composition2: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    use0: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    use1: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    use2: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    use3: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    use4: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    substitute0: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    substitute1: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    substitute2: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    substitute3: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    substitute4: Option<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    substitutes: Vec<String>,
    #[serde(rename = "Consolidated_Side_Effects", default, deserialize_with = "lenient_text")]
    side_effects: Option<String>,
    #[serde(rename = "Habit Forming", default, deserialize_with = "lenient_text")]
    habit_forming: Option<String>,
    #[serde(rename = "Therapeutic Class", default, deserialize_with = "lenient_text")]
    therapeutic_class: Option<String>,
    #[serde(rename = "Chemical Class", default, deserialize_with = "lenient_text")]
    chemical_class: Option<String>,
    #[serde(rename = "Action Class", default, deserialize_with = "lenient_text")]
    action_class: Option<String>,
}

impl From<RawMedicine> for StoredMedicine {
    fn from(raw: RawMedicine) -> Self {
        let uses: [Option<String>; FLAT_FIELD_SLOTS] =
            [raw.use0, raw.use1, raw.use2, raw.use3, raw.use4];
        let flat_substitutes: [Option<String>; FLAT_FIELD_SLOTS] = [
            raw.substitute0,
            raw.substitute1,
            raw.substitute2,
            raw.substitute3,
            raw.substitute4,
        ];

        let substitutes = flat_substitutes
            .into_iter()
            .flatten()
            .chain(raw.substitutes)
            .filter(|s| !s.trim().is_empty())
            .fold(Vec::new(), |mut acc: Vec<String>, s| {
                if !acc.contains(&s) {
                    acc.push(s);
                }
                acc
            });

        Self {
            name: raw.name.unwrap_or_default(),
            manufacturer_name: raw.manufacturer_name,
            price: raw.price,
            medicine_type: raw.medicine_type,
            pack_size_label: raw.pack_size_label,
            package: raw.package,
            short_composition1: raw.short_composition1,
            short_composition2: raw.short_composition2,
            uses: uses
                .into_iter()
                .flatten()
                .filter(|u| !u.trim().is_empty())
                .collect(),
            substitutes,
            side_effects: raw.side_effects,
            habit_forming: raw.habit_forming,
            therapeutic_class: raw.therapeutic_class,
            chemical_class: raw.chemical_class,
            action_class: raw.action_class,
        }
    }
}

/// Text form of a scalar value. Arrays and objects have none.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!("Ignoring non-scalar value {} in a text field", other);
            None
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Accepts an array of names or a single name; other values read as an empty list.
fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

/// Accepts a JSON number or a numeric string. Anything else reads as no price.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                match text.parse::<f64>() {
                    Ok(price) => Some(price),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid price {:?}: {}", text, e);
                        None
                    }
                }
            }
        }
        Value::Null => None,
        other => {
            tracing::warn!("Ignoring invalid price {}", other);
            None
        }
    })
}

impl StoredMedicine {
    /// Name-only projection used by the suggestion endpoint.
    pub fn to_suggestion(&self) -> SuggestionRes {
        SuggestionRes {
            name: self.name.clone(),
        }
    }

    /// Fixed detail allowlist, with the price under its plain name.
    pub fn to_detail(&self) -> MedicineRes {
        MedicineRes {
            name: self.name.clone(),
            manufacturer_name: self.manufacturer_name.clone(),
            price: self.price,
            short_composition1: self.short_composition1.clone(),
            short_composition2: self.short_composition2.clone(),
            medicine_type: self.medicine_type.clone(),
            pack_size_label: self.pack_size_label.clone(),
            package: self.package.clone(),
            uses: self.uses.clone(),
            substitutes: self.substitutes.clone(),
            side_effects: self.side_effects.clone(),
            habit_forming: self.habit_forming.clone(),
            therapeutic_class: self.therapeutic_class.clone(),
            chemical_class: self.chemical_class.clone(),
            action_class: self.action_class.clone(),
        }
    }

    /// Projection used by the similar-medicines endpoint.
    pub fn to_similar(&self) -> SimilarMedicineRes {
        SimilarMedicineRes {
            name: self.name.clone(),
            manufacturer_name: self.manufacturer_name.clone(),
            price: self.price,
            short_composition1: self.short_composition1.clone(),
            short_composition2: self.short_composition2.clone(),
        }
    }
}
