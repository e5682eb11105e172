use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failure reading {filepath}: {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure decoding {filepath}: {msg}")]
    DecodeError { filepath: String, msg: String },
    #[error("unsupported file type: {0}, expected a .toml or .json file")]
    UnsupportedFileType(String),
}
