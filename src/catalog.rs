// src/catalog.rs

use anyhow::{bail, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::fetch::fetch_workbook;
use crate::lookup::{self, LookupIndex, QueryOutcome};
use crate::process::{
    flatten_remarks, normalize_local_charges, parse_rate_sheet, LocalCharge, RateRecord,
};
use crate::workbook::Workbook;

/// Everything one load produced. A reload builds a new catalog; the old one
/// stays usable until the caller swaps it out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub rates: Vec<RateRecord>,
    pub index: LookupIndex,
    /// `None` when the workbook has no local-charges sheet.
    pub local_charges: Option<Vec<LocalCharge>>,
    /// `None` when the workbook has no remarks sheet.
    pub remarks: Option<Vec<String>>,
}

impl Catalog {
    /// Fetch, decode and normalize the configured workbook.
    #[tracing::instrument(level = "info", skip(client, config), fields(source = %config.source))]
    pub async fn load(client: &Client, config: &Config) -> Result<Self> {
        let bytes = fetch_workbook(client, &config.source).await?;
        let workbook = Workbook::from_bytes(bytes)?;
        Self::from_workbook(&workbook, config)
    }

    pub fn from_workbook(workbook: &Workbook, config: &Config) -> Result<Self> {
        let names = workbook.sheet_names();
        debug!(?names, "sheet names");

        let Some(rate_sheet) = workbook.sheet(&config.rates_sheet) else {
            error!(?names, "rate sheet missing");
            bail!(
                "sheet \"{}\" not found; available sheets: {}",
                config.rates_sheet,
                names.join(", ")
            );
        };
        let rates = parse_rate_sheet(&rate_sheet.rows, config.max_header_scan);
        let index = LookupIndex::build(&rates);

        let local_charges = match workbook.sheet(&config.local_charges_sheet) {
            Some(sheet) => {
                let records = sheet.records();
                debug!(rows = records.len(), "local charges rows");
                Some(normalize_local_charges(&records))
            }
            None => {
                warn!(sheet = %config.local_charges_sheet, "no local charges sheet (optional)");
                None
            }
        };

        let remarks = match workbook.sheet(&config.remarks_sheet) {
            Some(sheet) => {
                let records = sheet.records();
                debug!(rows = records.len(), "remarks rows");
                Some(flatten_remarks(&records))
            }
            None => {
                warn!(sheet = %config.remarks_sheet, "no remarks sheet");
                None
            }
        };

        info!(
            rates = rates.len(),
            origins = index.origins.len(),
            destinations = index.destinations.len(),
            "catalog ready"
        );
        Ok(Self {
            rates,
            index,
            local_charges,
            remarks,
        })
    }

    pub fn search(&self, origin: &str, destination: &str) -> QueryOutcome<'_> {
        lookup::search(&self.rates, origin, destination)
    }
}
