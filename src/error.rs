// File: error.rs
// License: Apache v2.0

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("eigendecomposition did not converge within {max_iter} iterations")]
    NoConvergence { max_iter: usize },

    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    DumpConfig(#[from] toml::ser::Error),

    #[error("failed to set up logging: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;
