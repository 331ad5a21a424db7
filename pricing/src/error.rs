use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{parameter} must be non-zero and positive, got {value}")]
    ZeroDivisor { parameter: &'static str, value: f64 },
    #[error("{parameter} must be strictly positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}
