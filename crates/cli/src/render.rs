//! Plain-text rendering of lookup results.

use medquery_client::{MedicineRes, SimilarMedicineRes};
use std::fmt::Write;

pub fn price(value: Option<f64>) -> String {
    match value {
        Some(p) => format!("₹{p:.2}"),
        None => "price n/a".into(),
    }
}

fn composition(comp1: Option<&str>, comp2: Option<&str>) -> String {
    [comp1, comp2]
        .into_iter()
        .flatten()
        .filter(|c| !c.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" + ")
}

pub fn medicine(m: &MedicineRes) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", m.name, price(m.price));

    let fields = [
        ("Manufacturer", m.manufacturer_name.as_deref()),
        ("Type", m.medicine_type.as_deref()),
        ("Pack", m.pack_size_label.as_deref()),
        ("Side effects", m.side_effects.as_deref()),
        ("Habit forming", m.habit_forming.as_deref()),
        ("Therapeutic class", m.therapeutic_class.as_deref()),
        ("Chemical class", m.chemical_class.as_deref()),
        ("Action class", m.action_class.as_deref()),
    ];
    let comp = composition(
        m.short_composition1.as_deref(),
        m.short_composition2.as_deref(),
    );
    if !comp.is_empty() {
        let _ = writeln!(out, "  Composition: {comp}");
    }
    for (label, value) in fields {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }
    if !m.uses.is_empty() {
        let _ = writeln!(out, "  Uses: {}", m.uses.join("; "));
    }
    if !m.substitutes.is_empty() {
        let _ = writeln!(out, "  Listed substitutes: {}", m.substitutes.join(", "));
    }
    out
}

pub fn similar_list(items: &[SimilarMedicineRes]) -> String {
    if items.is_empty() {
        return "No similar medicines found.\n".into();
    }

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let _ = write!(out, "{:>3}. {} ({})", i + 1, item.name, price(item.price));
        if let Some(maker) = item.manufacturer_name.as_deref() {
            let _ = write!(out, " - {maker}");
        }
        out.push('\n');
    }
    out
}
