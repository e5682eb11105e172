use crate::{config::ConfigurationError, ingest::IngestError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldMapAppError {
    #[error(transparent)]
    IngestError(#[from] IngestError),
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
    #[error("failure serializing output: {source}")]
    OutputSerializationError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure creating output directory {0}: {1}")]
    OutputDirectoryError(String, std::io::Error),
}
