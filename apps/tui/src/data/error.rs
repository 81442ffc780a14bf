use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse station dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse topology: {0}")]
    Topology(String),
}
