use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::pnl::calculate_pnl_vector;
use crate::var::sample_var;

/// A position valued at `spot_value` together with its market rate history,
/// ordered from most recent to oldest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    name: String,
    spot_value: f64,
    historical_rates: Vec<f64>,
}

impl Asset {
    pub fn new(name: impl Into<String>, spot_value: f64, historical_rates: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            spot_value,
            historical_rates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spot_value(&self) -> f64 {
        self.spot_value
    }

    pub fn historical_rates(&self) -> &[f64] {
        &self.historical_rates
    }

    pub fn pnl_vector(&self) -> Result<Array1<f64>, DomainError> {
        calculate_pnl_vector(self.spot_value, &self.historical_rates)
            .map_err(|err| err.in_asset(&self.name))
    }

    /// VaR of this asset on its own, see [`crate::historical_var`].
    pub fn value_at_risk(&self, confidence_level: f64) -> Result<f64, DomainError> {
        sample_var(self.pnl_vector()?.into_raw_vec(), confidence_level)
    }
}
