//! Closed-form pricing of European vanilla options.

pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::{price, price_call, price_put, BlackScholesMerton, OptionPrice, OptionPrices};
pub use common::models::{OptionParameters, ReferencePrices};
pub use error::DomainError;
