use pricing::{OptionPrices, ReferencePrices};
use risk::Portfolio;
use tracing::info;

use crate::error::DataError;
use crate::provider::DataProvider;

/// Option prices and portfolio VaR for one set of market data.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    pub prices: OptionPrices,
    pub reference: Option<ReferencePrices>,
    pub confidence_level: f64,
    pub var: f64,
}

impl RiskReport {
    pub fn evaluate(provider: &impl DataProvider) -> Result<Self, DataError> {
        let option = provider.produce_option_parameters()?;
        let prices = pricing::price(&option)?;

        let portfolio: Portfolio = provider.produce_assets()?.into_iter().collect();
        let confidence_level = provider.var_settings()?.confidence_level;
        let var = portfolio.calculate_var(confidence_level)?;

        info!(
            call = prices.call,
            put = prices.put,
            assets = portfolio.len(),
            confidence_level,
            var,
            "risk report"
        );
        Ok(Self {
            prices,
            reference: option.reference,
            confidence_level,
            var,
        })
    }

    /// Whether both prices are within `tolerance` of the reference prices, if any were given.
    pub fn matches_reference(&self, tolerance: f64) -> Option<bool> {
        self.reference.map(|reference| {
            (self.prices.call - reference.call).abs() <= tolerance
                && (self.prices.put - reference.put).abs() <= tolerance
        })
    }
}
