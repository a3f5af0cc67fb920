pub mod catalog;
pub mod config;
pub mod fetch;
pub mod lookup;
pub mod process;
pub mod render;
pub mod schema;
pub mod workbook;

pub use catalog::Catalog;
pub use config::Config;
