use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::assessment::CategoryId;

/// Failure talking to the WorkForce API.
///
/// Kept `Clone` so the company-context panel can hold the last failure while it
/// offers a retry.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            NetworkError::Malformed(err.to_string())
        } else {
            NetworkError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfiguratorError {
    #[error("{0} is a slider and has no options")]
    SliderHasNoOptions(CategoryId),
    #[error("{0} is not active")]
    CategoryInactive(CategoryId),
    #[error("\"{option}\" is not an option of {category}")]
    UnknownOption { category: CategoryId, option: String },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Errors from the auth and company-context endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Rejected(String),
    #[error("Invalid form: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("A submission is already in progress")]
    InFlight,
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;
