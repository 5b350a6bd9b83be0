//! Export module for the household budget
//!
//! Serializes computed summaries and ratios:
//! - JSON: machine-readable, with schema versioning
//! - YAML: human-readable, with a header comment

pub mod json;
pub mod yaml;

pub use json::{export_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
