//! Data export
//!
//! - JSON and YAML: the whole ledger in one schema-versioned document
//! - CSV: income and expense rows for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_income_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
