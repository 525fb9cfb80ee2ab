use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid timestamp format string: '{0}'")]
    InvalidTimestampFormat(String),

    #[error("Failed to write the exported document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the summary view: {0}")]
    Serialization(#[from] serde_json::Error),
}
