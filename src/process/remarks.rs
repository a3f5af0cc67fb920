// src/process/remarks.rs

use crate::workbook::AuxRecord;

/// Every non-empty cell, row by row then column by column. Column identity
/// is dropped; remarks sheets have no fixed layout.
pub fn flatten_remarks(records: &[AuxRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.values())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
