// src/workbook/mod.rs

use anyhow::{anyhow, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde::Serialize;
use std::io::Cursor;
use tracing::{debug, warn};

/// Rows × columns of cell text, positionally indexed from the sheet's A1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub rows: Vec<Vec<String>>,
}

/// A loosely-typed row: column name → trimmed cell text, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuxRecord {
    cells: Vec<(String, String)>,
}

impl AuxRecord {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first column in `names` that exists in this record.
    /// A present-but-empty column still wins over later names.
    pub fn pick(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|n| self.get(n))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }
}

impl RawSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Row-keyed view: the first non-blank row names the columns, every later
    /// non-blank row becomes a record with a value for each named column.
    pub fn records(&self) -> Vec<AuxRecord> {
        let mut rows = self.rows.iter().filter(|r| !is_blank_row(r));
        let header = match rows.next() {
            Some(h) => column_names(h),
            None => return Vec::new(),
        };

        rows.map(|row| {
            let cells = header
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let v = row.get(idx).map(|s| s.trim()).unwrap_or("");
                    (name.clone(), v.to_string())
                })
                .collect();
            AuxRecord::new(cells)
        })
        .collect()
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Blank names become `__EMPTY`, `__EMPTY_1`, ...; repeats of a name get
/// `_1`, `_2`, ... appended.
fn column_names(header: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(header.len());
    for raw in header {
        let base = match raw.trim() {
            "" => "__EMPTY".to_string(),
            s => s.to_string(),
        };
        let mut name = base.clone();
        let mut n = 0;
        while out.contains(&name) {
            n += 1;
            name = format!("{}_{}", base, n);
        }
        out.push(name);
    }
    out
}

/// All sheets of a decoded workbook, in workbook order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<(String, RawSheet)>,
}

impl Workbook {
    pub fn from_sheets<I, S>(sheets: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Vec<String>>)>,
        S: Into<String>,
    {
        Self {
            sheets: sheets
                .into_iter()
                .map(|(name, rows)| (name.into(), RawSheet::new(rows)))
                .collect(),
        }
    }

    /// Decode xlsx/xlsm/xlsb/xls/ods bytes.
    #[tracing::instrument(level = "info", skip(bytes), fields(len = bytes.len()))]
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mut wb = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| anyhow!("failed to read workbook: {}", e))?;

        let names = wb.sheet_names();
        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = wb
                .worksheet_range(&name)
                .map_err(|e| anyhow!("reading sheet `{}`: {}", name, e))?;

            let (row_off, col_off) = range
                .start()
                .map(|(r, c)| (r as usize, c as usize))
                .unwrap_or((0, 0));
            let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_off];
            for cells in range.rows() {
                let mut row = vec![String::new(); col_off];
                row.extend(cells.iter().map(cell_text));
                rows.push(row);
            }
            debug!(sheet = %name, rows = rows.len(), "decoded sheet");
            sheets.push((name, RawSheet::new(rows)));
        }

        if sheets.is_empty() {
            warn!("workbook has no sheets");
        }
        Ok(Self { sheets })
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }
}

/// Cell text as a spreadsheet shows its raw value.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Error(e) => e.to_string(),
    }
}
