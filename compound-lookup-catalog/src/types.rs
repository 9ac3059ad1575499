//! Data model for the compound table.
//!
//! A [`Compound`] mirrors one row of the `compounds` table. Records are
//! never written by this workspace; they arrive from the datastore already
//! populated.

use serde::Serialize;

/// Name of the single table this tool reads.
pub const TABLE: &str = "compounds";

/// Column names in select order. Row mapping relies on this order.
pub const COLUMNS: [&str; 17] = [
    "cas_number",
    "molecular_weight",
    "molecular_formula",
    "compound_name_en",
    "compound_name_cn",
    "description",
    "threshold_threshold",
    "threshold_detection",
    "threshold_recognition",
    "ion_fragments",
    "odor",
    "ri_semi_nonpolar",
    "ri_nonpolar",
    "ri_polar",
    "category",
    "detected_samples",
    "has_aroma",
];

/// Display labels, keyed by column name, in [`COLUMNS`] order.
pub const FIELD_LABELS: [(&str, &str); 17] = [
    ("cas_number", "CAS"),
    ("molecular_weight", "Mol. weight"),
    ("molecular_formula", "Formula"),
    ("compound_name_en", "Compound name"),
    ("compound_name_cn", "Chinese name"),
    ("description", "Description"),
    ("threshold_threshold", "Threshold"),
    ("threshold_detection", "Threshold (d)"),
    ("threshold_recognition", "Threshold (r)"),
    ("ion_fragments", "Ion fragments"),
    ("odor", "Odor"),
    ("ri_semi_nonpolar", "RI semi-std non-polar"),
    ("ri_nonpolar", "RI non-polar"),
    ("ri_polar", "RI polar"),
    ("category", "Category"),
    ("detected_samples", "Detected in"),
    ("has_aroma", "Aroma"),
];

/// Look up the display label for a column name.
pub fn label_for(column: &str) -> Option<&'static str> {
    FIELD_LABELS
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, label)| *label)
}

/// One compound record.
///
/// Descriptive fields are kept as text regardless of how the datastore
/// stores them; numeric measurements are often annotated with units or
/// years and are only ever displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Compound {
    /// CAS registry number (the identifier).
    pub cas_number: String,
    pub molecular_weight: Option<String>,
    pub molecular_formula: Option<String>,
    pub compound_name_en: Option<String>,
    pub compound_name_cn: Option<String>,
    pub description: Option<String>,
    /// Odor threshold, mg/kg in water unless noted.
    pub threshold_threshold: Option<String>,
    /// Detection threshold.
    pub threshold_detection: Option<String>,
    /// Recognition threshold.
    pub threshold_recognition: Option<String>,
    pub ion_fragments: Option<String>,
    pub odor: Option<String>,
    pub ri_semi_nonpolar: Option<String>,
    pub ri_nonpolar: Option<String>,
    pub ri_polar: Option<String>,
    pub category: Option<String>,
    pub detected_samples: Option<String>,
    /// `None` when the column is NULL. Treated as `false` everywhere else.
    pub has_aroma: Option<bool>,
}

impl Compound {
    /// Create a record with only the identifier set.
    pub fn new(cas_number: impl Into<String>) -> Self {
        Self {
            cas_number: cas_number.into(),
            ..Self::default()
        }
    }

    /// Whether the compound is flagged as having an aroma. NULL counts as no.
    pub fn aromatic(&self) -> bool {
        self.has_aroma == Some(true)
    }

    /// "yes" / "no" rendering of the aroma flag.
    pub fn aroma_display(&self) -> &'static str {
        if self.aromatic() { "yes" } else { "no" }
    }

    /// Text value of a column by name, as it would be displayed.
    ///
    /// Returns `None` for unknown column names. Missing values render as
    /// an empty string.
    pub fn field(&self, column: &str) -> Option<String> {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let value = match column {
            "cas_number" => self.cas_number.clone(),
            "molecular_weight" => text(&self.molecular_weight),
            "molecular_formula" => text(&self.molecular_formula),
            "compound_name_en" => text(&self.compound_name_en),
            "compound_name_cn" => text(&self.compound_name_cn),
            "description" => text(&self.description),
            "threshold_threshold" => text(&self.threshold_threshold),
            "threshold_detection" => text(&self.threshold_detection),
            "threshold_recognition" => text(&self.threshold_recognition),
            "ion_fragments" => text(&self.ion_fragments),
            "odor" => text(&self.odor),
            "ri_semi_nonpolar" => text(&self.ri_semi_nonpolar),
            "ri_nonpolar" => text(&self.ri_nonpolar),
            "ri_polar" => text(&self.ri_polar),
            "category" => text(&self.category),
            "detected_samples" => text(&self.detected_samples),
            "has_aroma" => self.aroma_display().to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_has_a_label() {
        for (column, (labelled, _)) in COLUMNS.iter().zip(FIELD_LABELS.iter()) {
            assert_eq!(column, labelled);
        }
    }

    #[test]
    fn every_column_is_readable() {
        let c = Compound::new("64-17-5");
        for column in COLUMNS {
            assert!(c.field(column).is_some(), "column {column} not mapped");
        }
        assert_eq!(c.field("nope"), None);
    }

    #[test]
    fn null_aroma_is_not_aromatic() {
        let mut c = Compound::new("64-17-5");
        assert!(!c.aromatic());
        assert_eq!(c.aroma_display(), "no");
        c.has_aroma = Some(false);
        assert!(!c.aromatic());
        c.has_aroma = Some(true);
        assert!(c.aromatic());
        assert_eq!(c.field("has_aroma").as_deref(), Some("yes"));
    }
}
