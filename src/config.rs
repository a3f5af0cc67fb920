// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::schema::DEFAULT_MAX_SCAN;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local path or http(s) URL of the workbook.
    pub source: String,
    pub rates_sheet: String,
    pub local_charges_sheet: String,
    pub remarks_sheet: String,
    /// Leading rows searched for the rate table header.
    pub max_header_scan: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "data/tarifas.xlsx".into(),
            rates_sheet: "RATES".into(),
            local_charges_sheet: "GASTOS_LOCALES".into(),
            remarks_sheet: "REMARKS".into(),
            max_header_scan: DEFAULT_MAX_SCAN,
        }
    }
}

impl Config {
    /// Read a YAML config; missing keys keep their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing {:?}", path))
    }
}
