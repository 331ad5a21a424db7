//! Historical simulation Value-at-Risk for multi-asset portfolios.

pub mod asset;
pub mod error;
pub mod pnl;
pub mod portfolio;
pub mod var;

pub use asset::Asset;
pub use error::DomainError;
pub use pnl::calculate_pnl_vector;
pub use portfolio::Portfolio;
pub use var::{empirical_quantile, historical_var, DEFAULT_CONFIDENCE_LEVEL};
