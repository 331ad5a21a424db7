use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read market data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed market data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Pricing(#[from] pricing::DomainError),
    #[error(transparent)]
    Risk(#[from] risk::DomainError),
}
