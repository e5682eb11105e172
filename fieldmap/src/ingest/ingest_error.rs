use fieldmap_core::model::FieldCollectionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failure opening '{filepath}': {source}")]
    OpenError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure reading row {row} of '{filepath}': {source}")]
    RowError {
        filepath: String,
        row: usize,
        source: csv::Error,
    },
    #[error("invalid row in '{filepath}': {msg}")]
    InvalidRow { filepath: String, msg: String },
    #[error("invalid field collection in '{filepath}': {source}")]
    InvalidFieldCollection {
        filepath: String,
        source: FieldCollectionError,
    },
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure flushing file {0}: {1}")]
    FlushError(String, std::io::Error),
}
