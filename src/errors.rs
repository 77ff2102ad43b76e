use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Backend returned an error response: {0}")]
    ApiError(String),

    #[error("Failed to parse backend response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        BackendError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(error: serde_json::Error) -> Self {
        BackendError::ParseError(error.to_string())
    }
}
