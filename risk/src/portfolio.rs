use ndarray::Array1;
use tracing::debug;

use crate::asset::Asset;
use crate::error::DomainError;
use crate::var::{sample_var, validate_confidence, DEFAULT_CONFIDENCE_LEVEL};

/// Append-only collection of assets whose PnL is simulated on a common historical window.
///
/// Inputs are not checked when an asset is added. Every asset needs a history of the
/// same length, which is verified when the PnL is aggregated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    assets: Vec<Asset>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Element-wise sum of the PnL vectors of all assets.
    pub fn aggregate_pnl(&self) -> Result<Array1<f64>, DomainError> {
        let mut assets = self.assets.iter();
        let first = assets.next().ok_or(DomainError::EmptyPortfolio)?;
        let mut total = first.pnl_vector()?;

        for asset in assets {
            let pnl = asset.pnl_vector()?;
            if pnl.len() != total.len() {
                return Err(DomainError::MisalignedHistory {
                    expected: total.len(),
                    found: pnl.len(),
                }
                .in_asset(asset.name()));
            }
            total += &pnl;
        }

        debug!(
            assets = self.assets.len(),
            observations = total.len(),
            "aggregated portfolio pnl"
        );
        Ok(total)
    }

    /// Historical simulation VaR of the aggregated PnL.
    pub fn calculate_var(&self, confidence_level: f64) -> Result<f64, DomainError> {
        validate_confidence(confidence_level)?;
        sample_var(self.aggregate_pnl()?.into_raw_vec(), confidence_level)
    }

    pub fn calculate_default_var(&self) -> Result<f64, DomainError> {
        self.calculate_var(DEFAULT_CONFIDENCE_LEVEL)
    }
}

impl FromIterator<Asset> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

impl Extend<Asset> for Portfolio {
    fn extend<I: IntoIterator<Item = Asset>>(&mut self, iter: I) {
        self.assets.extend(iter);
    }
}
