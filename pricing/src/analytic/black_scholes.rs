use crate::common::models::OptionParameters;
use crate::error::DomainError;
use probability::distribution::{Distribution, Gaussian};
use tracing::trace;

/// Standard normal cumulative distribution function.
pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> Result<f64, DomainError>;
    fn call(params: &Self::Params) -> Result<f64, DomainError>;
}

/// Both prices of a European option, computed from the same d1 and d2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// '''math
    /// d1 = (ln(S/K) + T (r + v^2 / 2)) / (v sqrt(T))
    /// '''
    pub fn d1(dp: &OptionParameters) -> Result<f64, DomainError> {
        Self::d1_d2(dp).map(|(d1, _)| d1)
    }

    /// '''math
    /// d2 = d1 - v sqrt(T)
    /// '''
    pub fn d2(dp: &OptionParameters) -> Result<f64, DomainError> {
        Self::d1_d2(dp).map(|(_, d2)| d2)
    }

    fn d1_d2(dp: &OptionParameters) -> Result<(f64, f64), DomainError> {
        dp.validate()?;
        let sigma_exp = dp.volatility * dp.time_to_maturity.sqrt();
        let d1 = ((dp.spot_price / dp.strike_price).ln()
            + dp.time_to_maturity * (dp.risk_free_rate + dp.volatility.powi(2) / 2.0))
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        trace!(d1, d2, "black-scholes moneyness terms");
        Ok((d1, d2))
    }

    pub fn prices(dp: &OptionParameters) -> Result<OptionPrices, DomainError> {
        let (d1, d2) = Self::d1_d2(dp)?;
        let disc_strike = dp.strike_price * dp.discount_factor();
        Ok(OptionPrices {
            call: cdf(d1) * dp.spot_price - cdf(d2) * disc_strike,
            put: cdf(-d2) * disc_strike - cdf(-d1) * dp.spot_price,
        })
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(dp: &OptionParameters) -> Result<f64, DomainError> {
        let (d1, d2) = Self::d1_d2(dp)?;
        Ok(cdf(d1) * dp.spot_price - cdf(d2) * dp.strike_price * dp.discount_factor())
    }

    fn put(dp: &OptionParameters) -> Result<f64, DomainError> {
        let (d1, d2) = Self::d1_d2(dp)?;
        Ok(cdf(-d2) * dp.strike_price * dp.discount_factor() - cdf(-d1) * dp.spot_price)
    }
}

pub fn price_call(dp: &OptionParameters) -> Result<f64, DomainError> {
    BlackScholesMerton::call(dp)
}

pub fn price_put(dp: &OptionParameters) -> Result<f64, DomainError> {
    BlackScholesMerton::put(dp)
}

pub fn price(dp: &OptionParameters) -> Result<OptionPrices, DomainError> {
    BlackScholesMerton::prices(dp)
}
