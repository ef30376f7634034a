use crate::domain::role::Role;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Missing identifier: order id must not be empty")]
    MissingIdentifier,
    #[error("Access denied for role '{role}'")]
    AccessDenied { role: Role },
    #[error("Timed out during {step}")]
    Timeout { step: &'static str },
    #[error("{service} failed: {reason}")]
    Collaborator { service: &'static str, reason: String },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
