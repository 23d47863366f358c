//! Query filters for the three lookups.
//!
//! Two medicines are related when their composition strings are byte-for-byte equal.
//! Differently formatted but chemically identical compositions do not match.

use crate::store::{MedicineFilter, NameMatch};
use medquery_types::{is_blank, NonBlankText};

/// Names starting with `fragment`, case-insensitively.
pub fn suggestion_filter(fragment: &NonBlankText) -> MedicineFilter {
    MedicineFilter {
        name: Some(NameMatch::Prefix(fragment.as_str().to_owned())),
        ..Default::default()
    }
}

/// The name equal to `name`, case-insensitively.
pub fn detail_filter(name: &NonBlankText) -> MedicineFilter {
    MedicineFilter {
        name: Some(NameMatch::Exact(name.as_str().to_owned())),
        ..Default::default()
    }
}

/// Medicines sharing the given composition.
///
/// `comp1` must equal `short_composition1` exactly. When `comp2` is present and not blank,
/// `short_composition2` must equal it exactly as well. Values are used verbatim.
pub fn composition_filter(comp1: &NonBlankText, comp2: Option<&str>) -> MedicineFilter {
    let short_composition2 = if is_blank(comp2) {
        None
    } else {
        comp2.map(str::to_owned)
    };

    MedicineFilter {
        name: None,
        short_composition1: Some(comp1.as_str().to_owned()),
        short_composition2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> NonBlankText {
        NonBlankText::new(s).unwrap()
    }

    #[test]
    fn blank_second_composition_is_ignored() {
        let comp1 = text("Paracetamol (650mg)");
        for comp2 in [None, Some(""), Some("   ")] {
            let filter = composition_filter(&comp1, comp2);
            assert_eq!(filter.short_composition2, None);
            assert_eq!(
                filter.short_composition1.as_deref(),
                Some("Paracetamol (650mg)")
            );
        }
    }

    #[test]
    fn second_composition_is_anded_verbatim() {
        let filter = composition_filter(
            &text("Amoxycillin (500mg)"),
            Some(" Clavulanic Acid (125mg)"),
        );
        assert_eq!(
            filter.short_composition2.as_deref(),
            Some(" Clavulanic Acid (125mg)")
        );
        assert!(filter.name.is_none());
    }

    #[test]
    fn name_filters_keep_input_untrimmed() {
        assert_eq!(
            detail_filter(&text("Dolo 650 ")).name,
            Some(NameMatch::Exact("Dolo 650 ".into()))
        );
        assert_eq!(
            suggestion_filter(&text("Aug")).name,
            Some(NameMatch::Prefix("Aug".into()))
        );
    }
}
