pub mod local_charges;
pub mod rates;
pub mod remarks;

pub use local_charges::{normalize_local_charges, LocalCharge, TaxIndicator};
pub use rates::{parse_rate_sheet, project, RateRecord};
pub use remarks::flatten_remarks;
