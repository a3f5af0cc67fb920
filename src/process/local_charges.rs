// src/process/local_charges.rs

use serde::Serialize;
use std::fmt;

use crate::workbook::AuxRecord;

const CONCEPT: &[&str] = &["Concepto", "CONCEPTO", "concepto", "Concept", "CONCEPT"];
const DETAIL: &[&str] = &["Detalle", "DETALLE", "detalle", "Detail", "DETAIL"];
const CALCULATION: &[&str] = &[
    "Cálculo",
    "CÁLCULO",
    "CALCULO",
    "Calculo",
    "calculo",
    "cálculo",
    "Calculation",
];
const TAX: &[&str] = &[
    "IVA",
    "iva",
    "+ IVA",
    "+iva",
    "APLICA IVA",
    "Aplica IVA",
    "IMPUTA IVA",
    "Imputa IVA",
];

const AFFIRMATIVE: &[&str] = &["si", "sí", "yes", "true", "1"];
const NEGATIVE: &[&str] = &["n/a", "na", "no", "false", "0"];

/// Whether a local charge carries additional tax (IVA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxIndicator {
    Applies,
    NotApplicable,
    /// Unrecognized text, shown as written.
    Other(String),
}

impl TaxIndicator {
    pub fn from_cell(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).unwrap_or("");
        let low = raw.to_lowercase();

        if low.is_empty() {
            Self::NotApplicable
        } else if low.contains("+ iva") || low == "iva" || AFFIRMATIVE.contains(&low.as_str()) {
            Self::Applies
        } else if NEGATIVE.contains(&low.as_str()) {
            Self::NotApplicable
        } else if low.contains("iva") {
            Self::Applies
        } else {
            Self::Other(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Applies => "+ IVA",
            Self::NotApplicable => "N/A",
            Self::Other(s) => s,
        }
    }
}

impl Serialize for TaxIndicator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for TaxIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalCharge {
    pub concept: String,
    pub detail: String,
    pub calculation: String,
    pub tax: TaxIndicator,
}

pub fn normalize_local_charges(records: &[AuxRecord]) -> Vec<LocalCharge> {
    records
        .iter()
        .map(|r| {
            let text = |names: &[&str]| r.pick(names).unwrap_or("").trim().to_string();
            LocalCharge {
                concept: text(CONCEPT),
                detail: text(DETAIL),
                calculation: text(CALCULATION),
                tax: TaxIndicator::from_cell(r.pick(TAX)),
            }
        })
        .filter(|c| !(c.concept.is_empty() && c.detail.is_empty() && c.calculation.is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, &str)]) -> AuxRecord {
        AuxRecord::new(
            cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn tax_indicator_rules() {
        use TaxIndicator::*;
        assert_eq!(TaxIndicator::from_cell(Some("Sí")), Applies);
        assert_eq!(TaxIndicator::from_cell(Some("")), NotApplicable);
        assert_eq!(TaxIndicator::from_cell(None), NotApplicable);
        assert_eq!(TaxIndicator::from_cell(Some("IVA incluido")), Applies);
        assert_eq!(TaxIndicator::from_cell(Some("N/A")), NotApplicable);
        assert_eq!(TaxIndicator::from_cell(Some(" + IVA ")), Applies);
        assert_eq!(TaxIndicator::from_cell(Some("TRUE")), Applies);
        assert_eq!(TaxIndicator::from_cell(Some("0")), NotApplicable);
        assert_eq!(
            TaxIndicator::from_cell(Some(" exento ")),
            Other("exento".to_string())
        );
    }

    #[test]
    fn tax_indicator_labels() {
        assert_eq!(TaxIndicator::Applies.to_string(), "+ IVA");
        assert_eq!(TaxIndicator::NotApplicable.to_string(), "N/A");
        assert_eq!(TaxIndicator::Other("exento".into()).to_string(), "exento");
    }

    #[test]
    fn picks_column_variants_and_drops_empty_rows() {
        let recs = vec![
            record(&[("CONCEPTO", "THC"), ("Detalle", "por contenedor"), ("CALCULO", "USD 150"), ("Aplica IVA", "si")]),
            record(&[("CONCEPTO", ""), ("Detalle", " "), ("CALCULO", ""), ("Aplica IVA", "si")]),
            record(&[("CONCEPTO", "BL"), ("Detalle", ""), ("CALCULO", "USD 60"), ("Aplica IVA", "")]),
        ];
        let charges = normalize_local_charges(&recs);
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0].concept, "THC");
        assert_eq!(charges[0].detail, "por contenedor");
        assert_eq!(charges[0].calculation, "USD 150");
        assert_eq!(charges[0].tax, TaxIndicator::Applies);
        assert_eq!(charges[1].concept, "BL");
        assert_eq!(charges[1].tax, TaxIndicator::NotApplicable);
    }

    #[test]
    fn missing_tax_column_is_not_applicable() {
        let charges = normalize_local_charges(&[record(&[("Concepto", "Handling")])]);
        assert_eq!(charges[0].tax, TaxIndicator::NotApplicable);
        assert_eq!(charges[0].detail, "");
    }
}
