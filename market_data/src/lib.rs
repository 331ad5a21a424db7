//! Market data providers for the pricing and risk crates.

pub mod error;
pub mod json;
pub mod provider;
pub mod report;

pub use error::DataError;
pub use json::{parse_snapshot, JsonDataProvider};
pub use provider::{DataProvider, StaticDataProvider, VarSettings};
pub use report::RiskReport;
