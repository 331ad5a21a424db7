use pricing::OptionParameters;
use risk::{Asset, DEFAULT_CONFIDENCE_LEVEL};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Source of the inputs of one pricing and VaR run.
/// Implementations only parse and shape data, validation happens in the calculations.
pub trait DataProvider {
    fn produce_assets(&self) -> Result<Vec<Asset>, DataError>;

    fn produce_option_parameters(&self) -> Result<OptionParameters, DataError>;

    fn var_settings(&self) -> Result<VarSettings, DataError> {
        Ok(VarSettings::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarSettings {
    pub confidence_level: f64,
}

impl Default for VarSettings {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

/// Market data held in memory, also the layout of a serialized snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticDataProvider {
    pub option: OptionParameters,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub var: VarSettings,
}

impl StaticDataProvider {
    pub fn new(option: OptionParameters, assets: Vec<Asset>) -> Self {
        Self {
            option,
            assets,
            var: VarSettings::default(),
        }
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.var.confidence_level = confidence_level;
        self
    }
}

impl DataProvider for StaticDataProvider {
    fn produce_assets(&self) -> Result<Vec<Asset>, DataError> {
        Ok(self.assets.clone())
    }

    fn produce_option_parameters(&self) -> Result<OptionParameters, DataError> {
        Ok(self.option.clone())
    }

    fn var_settings(&self) -> Result<VarSettings, DataError> {
        Ok(self.var)
    }
}
