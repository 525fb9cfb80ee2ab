use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RiskError {
    #[error("Risk parameters from configuration are invalid: {0}")]
    InvalidParameters(String),
}
