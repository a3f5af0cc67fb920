// src/process/rates.rs

use serde::Serialize;
use tracing::{debug, warn};

use crate::schema::{
    clean_cell, locate_header_row, normalize_key, resolve_candidates, Field, FieldSpec, HeaderMap,
    RATE_FIELDS,
};

/// One offer on a route. At least one of `pol`/`pod` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateRecord {
    pub pol: String,
    pub pod: String,
    pub nor: String,
    pub rate_20: String,
    pub rate_40: String,
    pub validity: String,
    pub free_days: String,
    pub carrier: String,
    pub agent: String,
}

impl RateRecord {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Origin => &mut self.pol,
            Field::Destination => &mut self.pod,
            Field::NonOperativeReefer => &mut self.nor,
            Field::Rate20 => &mut self.rate_20,
            Field::Rate40 => &mut self.rate_40,
            Field::Validity => &mut self.validity,
            Field::FreeDays => &mut self.free_days,
            Field::Carrier => &mut self.carrier,
            Field::Agent => &mut self.agent,
        };
        *slot = value;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Origin => &self.pol,
            Field::Destination => &self.pod,
            Field::NonOperativeReefer => &self.nor,
            Field::Rate20 => &self.rate_20,
            Field::Rate40 => &self.rate_40,
            Field::Validity => &self.validity,
            Field::FreeDays => &self.free_days,
            Field::Carrier => &self.carrier,
            Field::Agent => &self.agent,
        }
    }

    /// NOR as shown to users: "N/A" when the sheet leaves it blank.
    pub fn nor_display(&self) -> &str {
        if self.nor.is_empty() {
            "N/A"
        } else {
            &self.nor
        }
    }
}

/// Project data rows into records using the columns resolved from `headers`.
/// Rows without origin and destination are dropped; order is kept and
/// duplicate routes are retained.
pub fn project(rows: &[Vec<String>], headers: &HeaderMap, specs: &[FieldSpec]) -> Vec<RateRecord> {
    let plan: Vec<(Field, Vec<usize>)> = specs
        .iter()
        .map(|s| (s.field, resolve_candidates(headers, s)))
        .collect();
    debug!(?plan, "column plan");

    rows.iter()
        .filter_map(|row| {
            let mut rec = RateRecord::default();
            for (field, columns) in &plan {
                let value = columns
                    .iter()
                    .map(|&idx| clean_cell(row.get(idx)))
                    .find(|v| !v.is_empty())
                    .unwrap_or_default();
                rec.set(*field, value);
            }
            (!rec.pol.is_empty() || !rec.pod.is_empty()).then_some(rec)
        })
        .collect()
}

/// Locate the header row of a rate sheet matrix and project the rows below it.
pub fn parse_rate_sheet(matrix: &[Vec<String>], max_scan: usize) -> Vec<RateRecord> {
    debug!(raw_rows = matrix.len(), "rate sheet");
    if matrix.len() < 2 {
        warn!("rate sheet is empty or has no data rows");
        return Vec::new();
    }

    let header_idx = locate_header_row(matrix, max_scan);
    let raw_headers: Vec<String> = matrix[header_idx]
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let headers = HeaderMap::from_row(&raw_headers);

    debug!(header_idx, ?raw_headers, "raw headers");
    debug!(
        normalized = ?raw_headers.iter().map(|h| normalize_key(h)).collect::<Vec<_>>(),
        "normalized headers"
    );
    debug!(?headers, "header map");

    let records = project(&matrix[header_idx + 1..], &headers, RATE_FIELDS);
    debug!(count = records.len(), "parsed rates");
    debug!(sample = ?records.iter().take(10).collect::<Vec<_>>(), "parsed sample");

    if lacks_forty_foot(&records) {
        let candidates: Vec<&str> = headers.keys().filter(|k| k.contains("40")).collect();
        warn!(?candidates, "no 40HC/40HQ values detected");
    }

    records
}

/// True when no record carries a 40-foot rate, including when there are none.
fn lacks_forty_foot(records: &[RateRecord]) -> bool {
    records.iter().all(|r| r.rate_40.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn headers(cells: &[&str]) -> HeaderMap {
        HeaderMap::from_row(&rows(&[cells])[0])
    }

    #[test]
    fn drops_rows_without_origin_and_destination() {
        let map = headers(&["POL", "POD", "NAVIERA", "20GP"]);
        let data = rows(&[&["", "  ", "MSC", "900"], &["Callao", "", "", ""]]);
        let recs = project(&data, &map, RATE_FIELDS);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].pol, "Callao");
        assert_eq!(recs[0].pod, "");
    }

    #[test]
    fn keeps_duplicate_routes_in_order() {
        let map = headers(&["POL", "POD", "NAVIERA"]);
        let data = rows(&[
            &["Callao", "Rotterdam", "MSC"],
            &["Callao", "Rotterdam", "Maersk"],
        ]);
        let recs = project(&data, &map, RATE_FIELDS);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].carrier, "MSC");
        assert_eq!(recs[1].carrier, "Maersk");
    }

    #[test]
    fn trims_values_and_leaves_unresolved_fields_empty() {
        let map = headers(&["Puerto Origen", "Puerto Destino", "Días Libres"]);
        let data = rows(&[&["  Valparaiso ", "Hamburg\u{00A0}", " 14 "]]);
        let recs = project(&data, &map, RATE_FIELDS);
        assert_eq!(recs[0].pol, "Valparaiso");
        assert_eq!(recs[0].pod, "Hamburg");
        assert_eq!(recs[0].free_days, "14");
        assert_eq!(recs[0].carrier, "");
        assert_eq!(recs[0].nor_display(), "N/A");
    }

    #[test]
    fn short_rows_yield_empty_fields() {
        let map = headers(&["POL", "POD", "AGENTE"]);
        let recs = project(&rows(&[&["Callao"]]), &map, RATE_FIELDS);
        assert_eq!(recs[0].pod, "");
        assert_eq!(recs[0].agent, "");
    }

    #[test]
    fn forty_foot_falls_through_to_populated_family() {
        let map = headers(&["POL", "POD", "40 HC (USD)", "40HQ ALL IN"]);
        let data = rows(&[
            &["Callao", "Rotterdam", "", "1500"],
            &["Callao", "Hamburg", "1400", "1600"],
        ]);
        let recs = project(&data, &map, RATE_FIELDS);
        assert_eq!(recs[0].rate_40, "1500");
        assert_eq!(recs[1].rate_40, "1400");
    }

    #[test]
    fn exact_alias_wins_even_when_empty() {
        let map = headers(&["POL", "POD", "NAVIERA", "naviera contacto"]);
        let recs = project(&rows(&[&["Callao", "Rotterdam", "", "ops@x"]]), &map, RATE_FIELDS);
        assert_eq!(recs[0].carrier, "");
    }

    #[test]
    fn parses_sheet_below_title_rows() {
        let matrix = rows(&[
            &["TARIFAS 2024"],
            &[],
            &["POL", "POD", "NOR", "20GP", "40HQ", "VALIDEZ", "FREE DAYS", "CARRIER", "FORWARDER"],
            &["Callao", "Rotterdam", "", "900", "1200", "31/12", "21", "MSC", "Acme"],
        ]);
        let recs = parse_rate_sheet(&matrix, 25);
        assert_eq!(recs.len(), 1);
        let r = &recs[0];
        assert_eq!(r.get(Field::Rate20), "900");
        assert_eq!(r.get(Field::Rate40), "1200");
        assert_eq!(r.validity, "31/12");
        assert_eq!(r.free_days, "21");
        assert_eq!(r.carrier, "MSC");
        assert_eq!(r.agent, "Acme");
    }

    #[test]
    fn sheet_without_data_rows_is_empty() {
        assert!(parse_rate_sheet(&rows(&[&["POL", "POD"]]), 25).is_empty());
        assert!(parse_rate_sheet(&[], 25).is_empty());
    }

    #[test]
    fn forty_foot_warning_covers_sheets_with_no_records() {
        assert!(lacks_forty_foot(&[]));

        let map = headers(&["POL", "POD", "20GP"]);
        let recs = project(&rows(&[&["Callao", "Rotterdam", "900"]]), &map, RATE_FIELDS);
        assert!(lacks_forty_foot(&recs));

        let map = headers(&["POL", "POD", "40HQ"]);
        let recs = project(&rows(&[&["Callao", "Rotterdam", "1200"]]), &map, RATE_FIELDS);
        assert!(!lacks_forty_foot(&recs));

        let matrix = rows(&[&["POL", "POD", "20GP"], &["", "", "900"]]);
        assert!(parse_rate_sheet(&matrix, 25).is_empty());
    }
}
