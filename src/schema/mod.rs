pub mod fields;
pub mod header;
pub mod keys;
pub mod resolve;

pub use fields::{Field, FieldSpec, RATE_FIELDS};
pub use header::{locate_header_row, HeaderMap, DEFAULT_MAX_SCAN};
pub use keys::{clean_cell, normalize_key};
pub use resolve::{resolve_candidates, resolve_column};
