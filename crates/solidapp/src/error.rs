use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Entry index {index} out of range (journal has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl SolidError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SolidError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
