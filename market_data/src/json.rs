use std::fs;
use std::path::{Path, PathBuf};

use pricing::OptionParameters;
use risk::Asset;
use tracing::info;

use crate::error::DataError;
use crate::provider::{DataProvider, StaticDataProvider, VarSettings};

/// Reads a JSON market snapshot from disk on every request.
///
/// ```json
/// {
///   "option": { "spot_price": 100.0, "strike_price": 95.0, "time_to_maturity": 1.0,
///               "risk_free_rate": 0.05, "volatility": 0.2 },
///   "assets": [ { "name": "ccy1", "spot_value": 50.0, "historical_rates": [1.1, 1.0] } ],
///   "var": { "confidence_level": 0.99 }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonDataProvider {
    path: PathBuf,
}

impl JsonDataProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<StaticDataProvider, DataError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot = parse_snapshot(&raw)?;
        info!(
            path = %self.path.display(),
            assets = snapshot.assets.len(),
            "loaded market snapshot"
        );
        Ok(snapshot)
    }
}

pub fn parse_snapshot(raw: &str) -> Result<StaticDataProvider, DataError> {
    Ok(serde_json::from_str(raw)?)
}

impl DataProvider for JsonDataProvider {
    fn produce_assets(&self) -> Result<Vec<Asset>, DataError> {
        Ok(self.load()?.assets)
    }

    fn produce_option_parameters(&self) -> Result<OptionParameters, DataError> {
        Ok(self.load()?.option)
    }

    fn var_settings(&self) -> Result<VarSettings, DataError> {
        Ok(self.load()?.var)
    }
}
