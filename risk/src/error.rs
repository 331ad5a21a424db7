use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("at least 2 historical rates are required, got {len}")]
    InsufficientHistory { len: usize },
    #[error("historical rate #{index} must be finite and positive, got {value}")]
    NonPositiveRate { index: usize, value: f64 },
    #[error("spot value must be finite and positive, got {value}")]
    NonPositiveSpot { value: f64 },
    #[error("misaligned or empty asset history: expected {expected} pnl values, got {found}")]
    MisalignedHistory { expected: usize, found: usize },
    #[error("misaligned or empty asset history: the portfolio holds no assets")]
    EmptyPortfolio,
    #[error("cannot estimate a quantile of an empty pnl sample")]
    EmptySample,
    #[error("pnl #{index} must be finite, got {value}")]
    NonFinitePnl { index: usize, value: f64 },
    #[error("confidence level must lie in (0, 1), got {0}")]
    ConfidenceLevel(f64),
    #[error("quantile probability must lie in [0, 1], got {0}")]
    QuantileProbability(f64),
    #[error("asset '{name}': {source}")]
    InAsset {
        name: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    pub(crate) fn in_asset(self, name: &str) -> Self {
        DomainError::InAsset {
            name: name.to_owned(),
            source: Box::new(self),
        }
    }
}
