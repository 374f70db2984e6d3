//! Export of the signed-in user's data
//!
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: user, all three collections and summary totals
//! - YAML: same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_json, PartitionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
