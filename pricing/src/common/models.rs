use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Call and put prices, e.g. quoted by a data source to verify a pricer against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePrices {
    pub call: f64,
    pub put: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// the asset's price at time t
    pub spot_price: f64,
    /// the strike or exercise price of the asset
    pub strike_price: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_maturity: f64,
    /// the annualized risk-free interest rate
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the stock's returns
    pub volatility: f64,
    /// not used in pricing
    #[serde(default)]
    pub reference: Option<ReferencePrices>,
}

impl OptionParameters {
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
            reference: None,
        }
    }

    pub fn with_reference_prices(mut self, call: f64, put: f64) -> Self {
        self.reference = Some(ReferencePrices { call, put });
        self
    }

    /// Checks the inputs of the closed-form model.
    /// Spot and strike enter a logarithm, volatility and time to maturity are divisors.
    /// The risk-free rate may be zero or negative but has to be finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (parameter, value) in [
            ("spot price", self.spot_price),
            ("strike price", self.strike_price),
        ] {
            finite(parameter, value)?;
            if value <= 0.0 {
                return Err(DomainError::NonPositive { parameter, value });
            }
        }
        for (parameter, value) in [
            ("volatility", self.volatility),
            ("time to maturity", self.time_to_maturity),
        ] {
            finite(parameter, value)?;
            if value <= 0.0 {
                return Err(DomainError::ZeroDivisor { parameter, value });
            }
        }
        finite("risk-free rate", self.risk_free_rate)
    }

    /// Discount factor e^(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

fn finite(parameter: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFinite { parameter, value })
    }
}
